//! Configuration module for Edit Guardian.
//!
//! Loads configuration from environment variables.

use std::env;

use thiserror::Error;
use url::Url;

const DEFAULT_DATABASE: &str = "NYCREATION";
const DEFAULT_CHANNEL_URL: &str = "https://t.me/telegram";
const DEFAULT_SUPPORT_URL: &str = "https://t.me/BotSupport";
const DEFAULT_PORT: u16 = 10000;

/// Startup configuration failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// External links shown on the welcome menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Links {
    pub channel: Url,
    pub support_group: Url,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,

    /// Bot username (without @) for deep link construction.
    /// Optional - will be fetched via getMe if not set.
    pub bot_username: Option<String>,

    /// Users allowed to run admin commands.
    /// `ADMIN_ID` first, then every entry of `ADMIN_IDS`.
    pub admin_ids: Vec<u64>,

    pub links: Links,

    /// Port of the health-check server.
    pub port: u16,

    // MongoDB
    pub mongo_url: String,
    pub mongo_database: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = var("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;
        let mongo_url = var("MONGO_URL").ok_or(ConfigError::Missing("MONGO_URL"))?;

        let mut admin_ids = Vec::new();
        if let Some(raw) = var("ADMIN_ID") {
            admin_ids.push(parse_id("ADMIN_ID", &raw)?);
        }
        if let Some(raw) = var("ADMIN_IDS") {
            for part in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let id = parse_id("ADMIN_IDS", part)?;
                if !admin_ids.contains(&id) {
                    admin_ids.push(id);
                }
            }
        }

        let links = Links {
            channel: parse_url("CHANNEL_URL", var("CHANNEL_URL").as_deref(), DEFAULT_CHANNEL_URL)?,
            support_group: parse_url(
                "SUPPORT_GROUP_URL",
                var("SUPPORT_GROUP_URL").as_deref(),
                DEFAULT_SUPPORT_URL,
            )?,
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        // Parse bot username (strip @ if present)
        let bot_username = var("BOT_USERNAME")
            .map(|s| s.trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            bot_token,
            bot_username,
            admin_ids,
            links,
            port,
            mongo_url,
            mongo_database: var("MONGO_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        })
    }
}

fn parse_id(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
        var,
        reason: format!("{raw:?}: {e}"),
    })
}

fn parse_url(var: &'static str, raw: Option<&str>, default: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.unwrap_or(default)).map_err(|e| ConfigError::Invalid {
        var,
        reason: e.to_string(),
    })
}
