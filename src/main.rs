//! Ten-pin bowling runner (default binary).
//!
//! Feeds rolls from the keyboard, stdin, a `--rolls` script, or a seeded
//! auto-bowler into the scoring core and prints what happened.

use std::io::{self, IsTerminal};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tenpin::cli::{self, RunMode, USAGE};
use tenpin::core::Game;
use tenpin::input::{handle_key_event, should_quit};
use tenpin::play::{apply_command, outcome_line, play_line, play_lines, play_random, Reporter};
use tenpin::telemetry::init_tracing;
use tenpin::term::{screen_lines, LineStyle, StyledLine, TerminalRenderer};

fn main() -> Result<()> {
    let config = cli::load()?;
    if config.help {
        print!("{}", USAGE);
        return Ok(());
    }
    init_tracing(&config.log_filter);
    info!(mode = ?config.mode, json = config.json, "starting");

    let color = io::stdout().is_terminal() && !config.json;
    let mut game = Game::new();
    let mut reporter = Reporter::new(io::stdout().lock(), config.json, config.quiet, color);

    match config.mode {
        RunMode::Script(ref line) => {
            play_line(&mut game, line, &mut reporter)?;
            reporter.finish(&game)
        }
        RunMode::Random(seed) => play_random(&mut game, seed, config.strike_chance, &mut reporter),
        RunMode::Auto if !io::stdin().is_terminal() => {
            play_lines(&mut game, io::stdin().lock(), &mut reporter)
        }
        RunMode::Auto => {
            drop(reporter);
            let mut term = TerminalRenderer::new(color);
            term.enter()?;

            let result = run_interactive(&mut term, &mut game);

            // Always try to restore terminal state.
            if let Err(err) = term.exit() {
                warn!(error = %err, "failed to restore terminal");
            }
            result?;
            term.print(&screen_lines(&game.snapshot(), None))
        }
    }
}

fn run_interactive(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let mut message = StyledLine::new(
        "Keys: 0-9 pins, x strike, / spare, - gutter, r restart, q quit",
        LineStyle::Dim,
    );

    loop {
        term.draw(&screen_lines(&game.snapshot(), Some(message.clone())))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            if let Some(cmd) = handle_key_event(key) {
                message = outcome_line(&apply_command(game, cmd));
            }
        }
    }
}
