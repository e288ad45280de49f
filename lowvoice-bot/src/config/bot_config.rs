//! BotConfig: Telegram connection, logging, whisper lifetime and username resolver settings.

use anyhow::Result;
use std::env;
use std::time::Duration;

use super::token::{load_token, ConfigError};

/// Bot config. Use [`BotConfig::load`] for env-based loading, then [`BotConfig::validate`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN, or the content of the token file
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// WHISPER_TTL_SECS: how long a whisper stays readable
    pub whisper_ttl_secs: u64,
    /// RESOLVER_BASE_URL: public profile pages used to check recipient usernames
    pub resolver_base_url: String,
    /// RESOLVER_CACHE_SIZE: resolved usernames kept in memory
    pub resolver_cache_size: usize,
}

impl BotConfig {
    pub const DEFAULT_LOG_FILE: &'static str = "logs/lowvoicebot.log";
    pub const DEFAULT_WHISPER_TTL_SECS: u64 = 30 * 60;
    pub const DEFAULT_RESOLVER_BASE_URL: &'static str = "https://t.me";
    pub const DEFAULT_RESOLVER_CACHE_SIZE: usize = 1024;

    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = load_token(token)?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| Self::DEFAULT_LOG_FILE.to_string());
        let whisper_ttl_secs = env::var("WHISPER_TTL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT_WHISPER_TTL_SECS);
        let resolver_base_url = env::var("RESOLVER_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_RESOLVER_BASE_URL.to_string());
        let resolver_cache_size = env::var("RESOLVER_CACHE_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(Self::DEFAULT_RESOLVER_CACHE_SIZE);

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            whisper_ttl_secs,
            resolver_base_url,
            resolver_cache_size,
        })
    }

    /// Builds config with the given token; everything else at defaults.
    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            telegram_api_url: None,
            log_file: Self::DEFAULT_LOG_FILE.to_string(),
            whisper_ttl_secs: Self::DEFAULT_WHISPER_TTL_SECS,
            resolver_base_url: Self::DEFAULT_RESOLVER_BASE_URL.to_string(),
            resolver_cache_size: Self::DEFAULT_RESOLVER_CACHE_SIZE,
        }
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(ConfigError::Invalid {
                    key: "TELEGRAM_API_URL",
                    value: url_str.clone(),
                }
                .into());
            }
        }
        if reqwest::Url::parse(&self.resolver_base_url).is_err() {
            return Err(ConfigError::Invalid {
                key: "RESOLVER_BASE_URL",
                value: self.resolver_base_url.clone(),
            }
            .into());
        }
        if self.whisper_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "WHISPER_TTL_SECS",
                value: "0".to_string(),
            }
            .into());
        }
        if self.resolver_cache_size == 0 {
            return Err(ConfigError::Invalid {
                key: "RESOLVER_CACHE_SIZE",
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    pub fn whisper_ttl(&self) -> Duration {
        Duration::from_secs(self.whisper_ttl_secs)
    }
}
