//! Command-line and environment configuration for the `tenpin` runner.

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: tenpin [--rolls \"<tokens>\"] [--random <seed>] [--strike-chance <0-100>] [--json] [--quiet]

Without --rolls or --random, rolls are read line by line from stdin when it is
piped, otherwise the game is played from the keyboard (0-9, x, /, -, r, q).

Tokens: X strike, / spare, - gutter, or a pin count.

Environment:
  TENPIN_SEED            seed for --random when no value is given on the command line
  TENPIN_STRIKE_CHANCE   default for --strike-chance
  TENPIN_JSON            1/true to emit JSON lines
  TENPIN_LOG             tracing filter (default: warn)
";

/// Where rolls come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Decide from stdin: piped input is read as lines, a terminal gets keyboard play.
    Auto,
    Script(String),
    Random(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub mode: RunMode,
    pub json: bool,
    pub quiet: bool,
    pub strike_chance: u8,
    pub log_filter: String,
    pub help: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Auto,
            json: false,
            quiet: false,
            strike_chance: 0,
            log_filter: "warn".to_string(),
            help: false,
        }
    }
}

impl CliConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = env("TENPIN_SEED") {
            config.mode = RunMode::Random(parse_seed(&seed)?);
        }
        if let Some(chance) = env("TENPIN_STRIKE_CHANCE") {
            config.strike_chance = parse_chance(&chance)?;
        }
        config.json = env("TENPIN_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        if let Some(filter) = env("TENPIN_LOG").map(|s| s.trim().to_string()) {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }

        Ok(config)
    }
}

/// Parse argv (without the program name) on top of the environment.
pub fn parse_args(args: &[String], env: impl Fn(&str) -> Option<String>) -> Result<CliConfig> {
    let mut config = CliConfig::from_env(env)?;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rolls" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --rolls"))?;
                config.mode = RunMode::Script(v.clone());
            }
            "--random" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --random"))?;
                config.mode = RunMode::Random(parse_seed(v)?);
            }
            "--strike-chance" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --strike-chance"))?;
                config.strike_chance = parse_chance(v)?;
            }
            "--json" => config.json = true,
            "--quiet" | "-q" => config.quiet = true,
            "--help" | "-h" => config.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

/// Read argv and the process environment.
pub fn load() -> Result<CliConfig> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args, |key| std::env::var(key).ok())
}

fn parse_seed(v: &str) -> Result<u32> {
    v.trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("invalid seed: {}", v))
}

fn parse_chance(v: &str) -> Result<u8> {
    v.trim()
        .parse::<u8>()
        .ok()
        .filter(|&pct| pct <= 100)
        .ok_or_else(|| anyhow!("invalid strike chance (expected 0-100): {}", v))
}
