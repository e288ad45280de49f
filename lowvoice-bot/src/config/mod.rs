//! Bot configuration loaded from env (and the `.BOT_TOKEN` file fallback).

mod bot_config;
mod token;


pub use bot_config::BotConfig;
pub use token::{load_token, mask_token, ConfigError, DEFAULT_TOKEN_FILE};
