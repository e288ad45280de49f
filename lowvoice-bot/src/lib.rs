//! # Low Voice Bot
//!
//! Telegram inline bot that sends private messages ("whispers") in public groups. A user types
//! `@bot @recipient text` in any chat; the posted placeholder carries buttons that reveal the text
//! to the sender or recipient only, save it to a private chat with the bot, or expire it early.
//!
//! Wires the message handler chain, the inline query and callback handlers, the whisper store and
//! the username resolver; loads config from env and runs the teloxide dispatcher.

pub mod cli;
pub mod components;
pub mod config;
pub mod format;
pub mod handlers;
pub mod resolver;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, BotComponents};
pub use config::{mask_token, BotConfig, ConfigError};
pub use handlers::{
    InlineWhisperHandler, LoggingHandler, PingHandler, SaveHandler, StartHandler,
    WhisperCallbackHandler,
};
pub use resolver::{CachedResolver, TelegramWebResolver, UserResolver};
pub use runner::run_bot;
pub use telegram::{
    run_dispatcher, TelegramBotAdapter, TelegramCallbackQueryWrapper, TelegramInlineQueryWrapper,
    TelegramMessageWrapper, TelegramUserWrapper,
};
