//! Handlers: the message chain (logging, `/start`, `/start SAVE_<id>`, `/ping`), the inline query
//! handler that creates whispers, and the callback handler behind the placeholder buttons.

mod callback;
mod inline_whisper;
mod logging;
mod ping;
mod save;
mod start;

pub use callback::WhisperCallbackHandler;
pub use inline_whisper::InlineWhisperHandler;
pub use logging::LoggingHandler;
pub use ping::PingHandler;
pub use save::SaveHandler;
pub use start::StartHandler;
