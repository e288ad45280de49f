//! # lowvoice-core
//!
//! Core types and traits for the whisper bot: [`Bot`], [`Handler`], incoming updates (message,
//! inline query, callback query), outgoing reply shapes (keyboards, inline articles, callback
//! answers) and tracing initialization. Transport-agnostic; the Telegram binding lives in
//! `lowvoice-bot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod reply;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use reply::{
    Button, ButtonAction, CallbackAnswer, InlineAnswer, InlineArticle, Keyboard, SendOptions,
    TextFormat,
};
pub use types::{
    CallbackQuery, Chat, Handler, HandlerResponse, InlineQuery, Message, ToCoreCallbackQuery,
    ToCoreInlineQuery, ToCoreMessage, ToCoreUser, User,
};
