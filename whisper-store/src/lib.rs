//! # whisper-store
//!
//! A whisper is a short private message posted to a group as a placeholder; only its sender and
//! its named recipient may read it. This crate holds the whisper model, an in-memory store whose
//! entries expire on a timer, and the parsing of the inline query and button payloads that
//! reference whispers.

mod error;
mod payload;
mod query;
mod store;
mod whisper;

pub use error::{InlineError, WhisperError};
pub use payload::{
    callback_data, parse_callback_data, parse_save_payload, save_payload, CallbackAction,
    SAVE_PREFIX,
};
pub use query::{is_valid_username, parse_query, WhisperRequest};
pub use store::WhisperStore;
pub use whisper::{format_ttl, Whisper, WhisperId};
