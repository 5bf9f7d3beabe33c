//! Configuration loading and validation.
//!
//! An [`ArenaConfig`] starts from its defaults, is optionally replaced by a
//! TOML file, and is finally adjusted by environment variables:
//!
//! - `SHOOTER_TICK_MS`: simulation tick interval
//! - `SHOOTER_SPAWN_MS`: enemy spawn period
//! - `SHOOTER_VERTICAL`: `1`/`true` enables vertical ship movement

use std::path::Path;

use crate::types::{ArenaConfig, Size};

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn check_size(field: &'static str, size: Size) -> Result<(), ConfigError> {
    if size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{}x{} is not a positive size", size.width, size.height)))
    }
}

/// Reject configurations the simulation cannot run with.
pub fn validate(config: &ArenaConfig) -> Result<(), ConfigError> {
    check_size("arena", Size::new(config.width, config.height))?;
    check_size("ship_size", config.ship_size)?;
    check_size("bullet_size", config.bullet_size)?;
    check_size("enemy_size", config.enemy_size)?;
    check_size("explosion_size", config.explosion_size)?;

    if config.ship_size.width > config.width || config.ship_size.height > config.height {
        return Err(invalid("ship_size", "ship does not fit inside the arena"));
    }
    let margin = config.ship_margin;
    for value in [margin.left, margin.right, margin.top, margin.bottom] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid("ship_margin", format!("{value} must be a non-negative number")));
        }
    }
    if config.width - config.ship_size.width - margin.left - margin.right < 0.0 {
        return Err(invalid("ship_margin", "left and right margins leave no room for the ship"));
    }
    if config.height - config.ship_size.height - margin.top - margin.bottom < 0.0 {
        return Err(invalid("ship_margin", "top and bottom margins leave no room for the ship"));
    }
    if !config.ship_start.x.is_finite() || !config.ship_start.y.is_finite() {
        return Err(invalid("ship_start", "must be a finite position"));
    }
    for (field, value) in [
        ("ship_speed_step", config.ship_speed_step),
        ("bullet_speed", config.bullet_speed),
        ("enemy_speed", config.enemy_speed),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(field, format!("{value} must be a non-negative number")));
        }
    }
    if config.tick_interval_ms == 0 {
        return Err(invalid("tick_interval_ms", "must be at least 1"));
    }
    if config.spawn_period_ms == 0 {
        return Err(invalid("spawn_period_ms", "must be at least 1"));
    }
    Ok(())
}

/// Parse a TOML document. Missing keys keep their defaults.
pub fn parse_config(text: &str) -> Result<ArenaConfig, ConfigError> {
    let config: ArenaConfig = toml::from_str(text)?;
    Ok(config)
}

/// Apply `SHOOTER_*` overrides from any variable source.
///
/// Unparseable values are ignored with a warning, matching how other env knobs behave.
pub fn apply_overrides(config: &mut ArenaConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SHOOTER_TICK_MS") {
        match v.trim().parse() {
            Ok(ms) => config.tick_interval_ms = ms,
            Err(_) => log::warn!("ignoring SHOOTER_TICK_MS={v:?}"),
        }
    }
    if let Some(v) = lookup("SHOOTER_SPAWN_MS") {
        match v.trim().parse() {
            Ok(ms) => config.spawn_period_ms = ms,
            Err(_) => log::warn!("ignoring SHOOTER_SPAWN_MS={v:?}"),
        }
    }
    if let Some(v) = lookup("SHOOTER_VERTICAL") {
        config.vertical_movement_enabled = v == "1" || v.eq_ignore_ascii_case("true");
    }
}

/// Load the configuration: defaults, then `path` (if any), then the environment.
pub fn load_config(path: Option<&Path>) -> Result<ArenaConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            log::info!("loading arena config from {}", path.display());
            parse_config(&text)?
        }
        None => ArenaConfig::default(),
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok());
    validate(&config)?;
    Ok(config)
}
