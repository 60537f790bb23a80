//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TASK_LATENCY_MS: u64 = 100;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} (expected true or false)")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Artificial delay applied to each task repository call.
    pub task_latency: Duration,
    pub seed_tasks: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, task_latency: Duration::from_millis(DEFAULT_TASK_LATENCY_MS), seed_tasks: true }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `TASK_LATENCY_MS`: default 100
    /// - `TASK_SEED`: `true` (default) or `false`
    ///
    /// Unparsable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFlag`] when `TASK_SEED` is set to
    /// something other than a boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT),
            task_latency: Duration::from_millis(env_parse("TASK_LATENCY_MS", DEFAULT_TASK_LATENCY_MS)),
            seed_tasks: parse_flag("TASK_SEED", std::env::var("TASK_SEED").ok().as_deref(), true)?,
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_flag(var: &'static str, raw: Option<&str>, default: bool) -> Result<bool, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw.to_owned() }),
    }
}
