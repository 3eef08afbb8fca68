//! TerminalRenderer: writes styled screen lines to a real terminal.
//!
//! Two modes share one encoder: interactive play redraws the whole screen on
//! an alternate buffer in raw mode, scripted play appends lines to stdout.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::view::{LineStyle, StyledLine};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    /// Whether `enter` switched the terminal into raw mode.
    raw: bool,
    /// Emit ANSI styling (off when stdout is not a terminal).
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
            raw: false,
            color,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.raw = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.raw {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.raw = false;
        Ok(())
    }

    /// Clear the screen and draw `lines` from the top-left corner.
    pub fn draw(&mut self, lines: &[StyledLine]) -> Result<()> {
        self.buf.clear();
        encode_screen_into(lines, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    /// Append `lines` below whatever is already on stdout.
    pub fn print(&mut self, lines: &[StyledLine]) -> Result<()> {
        self.buf.clear();
        encode_lines_into(lines, self.color, "\n", &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-screen redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_screen_into(lines: &[StyledLine], color: bool, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    // Raw mode does not translate `\n` into a carriage return.
    encode_lines_into(lines, color, "\r\n", out)
}

/// Encode `lines`, each followed by `newline`, into `out`.
pub fn encode_lines_into(
    lines: &[StyledLine],
    color: bool,
    newline: &str,
    out: &mut Vec<u8>,
) -> Result<()> {
    for line in lines {
        if color {
            apply_style_into(out, line.style)?;
        }
        out.queue(Print(&line.text))?;
        if color {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        out.queue(Print(newline))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: LineStyle) -> Result<()> {
    match style {
        LineStyle::Plain => {}
        LineStyle::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        LineStyle::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineStyle::Notice => {
            out.queue(SetForegroundColor(Color::Green))?;
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        LineStyle::Warning => {
            out.queue(SetForegroundColor(Color::Yellow))?;
        }
    }
    Ok(())
}
