//! Configuration module for the bot.
//!
//! Loads configuration from environment variables (and `.env`, if present).

use std::env;
use std::fmt;

use thiserror::Error;

const DEFAULT_POLL_TIMEOUT_SECS: u64 = 60;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup configuration is missing or malformed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid {key} entry {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub debug: bool,
    /// Long polling timeout in seconds.
    pub poll_timeout: u64,

    /// Administrator user IDs (comma-separated in `ADMIN_IDS`).
    pub admin_ids: Vec<u64>,

    /// Default log filter level when `RUST_LOG` is not set.
    pub log_level: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("debug", &self.debug)
            .field("poll_timeout", &self.poll_timeout)
            .field("admin_ids", &self.admin_ids)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("BOT_TOKEN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let debug = match lookup("BOT_DEBUG") {
            Some(value) => parse_bool("BOT_DEBUG", &value)?,
            None => false,
        };

        let poll_timeout = match lookup("BOT_TIMEOUT") {
            Some(value) => value.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "BOT_TIMEOUT",
                value: value.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_POLL_TIMEOUT_SECS,
        };

        let admin_ids = parse_admin_ids(&lookup("ADMIN_IDS").unwrap_or_default())?;

        let log_level = lookup("LOG_LEVEL")
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            bot_token,
            debug,
            poll_timeout,
            admin_ids,
            log_level,
        })
    }
}

/// Parse `"123, 456,,789"` into IDs. Blank entries are skipped; anything
/// else that isn't a number is an error.
pub fn parse_admin_ids(raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<u64>().map_err(|e| ConfigError::Invalid {
                key: "ADMIN_IDS",
                value: part.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}
