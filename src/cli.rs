//! Command-line options and logging setup for the binary.
//!
//! ```text
//! tui-shooter [--config <path>] [--seed <n>] [--vertical]
//! ```
//!
//! Environment:
//! - `SHOOTER_CONFIG`: config file used when `--config` is absent
//! - `SHOOTER_SEED`: enemy placement seed used when `--seed` is absent
//! - `SHOOTER_LOG`: log file path; logging is off when unset
//! - `RUST_LOG`: log filter (default `info`)
//! - plus the arena overrides read by [`crate::core::config`]

use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};

use crate::core::{load_config, ArenaConfig};

pub const USAGE: &str = "usage: tui-shooter [--config <path>] [--seed <n>] [--vertical]";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub vertical: bool,
    pub help: bool,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut opts = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let Some(path) = args.next() else {
                        bail!("--config needs a path");
                    };
                    opts.config_path = Some(PathBuf::from(path));
                }
                "--seed" | "-s" => {
                    let Some(value) = args.next() else {
                        bail!("--seed needs a number");
                    };
                    let seed = value
                        .parse()
                        .with_context(|| format!("invalid seed {value:?}"))?;
                    opts.seed = Some(seed);
                }
                "--vertical" => opts.vertical = true,
                "--help" | "-h" => opts.help = true,
                other => bail!("unknown argument {other:?}\n{USAGE}"),
            }
        }
        Ok(opts)
    }

    /// Fill unset options from `SHOOTER_*` variables.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if self.config_path.is_none() {
            self.config_path = lookup("SHOOTER_CONFIG")
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        }
        if self.seed.is_none() {
            self.seed = lookup("SHOOTER_SEED").and_then(|s| s.trim().parse().ok());
        }
        self
    }

    /// Load the arena configuration these options point at.
    pub fn arena_config(&self) -> Result<ArenaConfig> {
        let mut config = load_config(self.config_path.as_deref()).with_context(|| {
            match &self.config_path {
                Some(path) => format!("loading {}", path.display()),
                None => "loading default arena config".to_string(),
            }
        })?;
        if self.vertical {
            config.vertical_movement_enabled = true;
        }
        Ok(config)
    }

    /// The seed for the first session.
    pub fn session_seed(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Route `log` output to the file named by `SHOOTER_LOG`.
///
/// The terminal is in raw mode on the alternate screen while playing, so
/// nothing is ever written to stderr.
pub fn init_logging() -> Result<()> {
    let Some(path) = std::env::var("SHOOTER_LOG")
        .ok()
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing logger")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let opts = Options::parse(["--config", "arena.toml", "--seed", "42", "--vertical"]).unwrap();
        assert_eq!(opts.config_path, Some(PathBuf::from("arena.toml")));
        assert_eq!(opts.seed, Some(42));
        assert!(opts.vertical);
        assert!(!opts.help);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(Options::parse(["--seed"]).is_err());
        assert!(Options::parse(["--seed", "many"]).is_err());
        assert!(Options::parse(["--config"]).is_err());
        assert!(Options::parse(["--fast"]).is_err());
    }

    #[test]
    fn env_fills_only_missing_options() {
        let env = |key: &str| match key {
            "SHOOTER_SEED" => Some("7".to_string()),
            "SHOOTER_CONFIG" => Some("  ".to_string()),
            _ => None,
        };
        let opts = Options::parse(Vec::<String>::new()).unwrap().with_env(env);
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.config_path, None);

        let opts = Options::parse(["--seed", "1"]).unwrap().with_env(env);
        assert_eq!(opts.seed, Some(1));
        assert_eq!(opts.session_seed(), 1);
    }

    #[test]
    fn missing_config_file_is_reported() {
        let opts = Options {
            config_path: Some(PathBuf::from("/definitely/not/here.toml")),
            ..Options::default()
        };
        let err = opts.arena_config().unwrap_err();
        assert!(format!("{err:#}").contains("not/here.toml"));
    }
}
