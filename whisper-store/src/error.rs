//! User-facing errors. `Display` is the exact text shown to the Telegram user.

use thiserror::Error;

/// Errors answered to callback buttons and `/start SAVE_` deep links.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhisperError {
    #[error("⏲️🔔/❌ The message is expired or non-existent.")]
    Expired,

    #[error("🚫 You are neither the sender nor recipient.")]
    NotParticipant,

    #[error("❌ Unsupported Action ❌")]
    UnsupportedAction,

    #[error("❌ Malformed arguments")]
    MalformedArguments,
}

/// Errors answered to an inline query as a single explanatory article.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineError {
    #[error("empty inline query")]
    EmptyQuery,

    #[error("inline query is not `@RECIPIENT message`")]
    Usage,

    #[error("recipient username is invalid or unknown")]
    InvalidUsername,
}

impl InlineError {
    /// Inline result id; stable so clients can cache the answer.
    pub fn result_id(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "EMPTY_ARG",
            Self::Usage => "USAGE_ERROR",
            Self::InvalidUsername => "INVALID_USERNAME",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyQuery => "ℹ️ Show Usage",
            Self::Usage => "❌ Usage Error",
            Self::InvalidUsername => "❌ Invalid Username",
        }
    }

    /// HTML body posted when the user picks the article.
    pub fn text(&self, bot_username: &str) -> String {
        let usage = format!("<code>@{} @RECIPIENT message</code>", bot_username);
        match self {
            Self::EmptyQuery => format!("ℹ️ Usage: {}", usage),
            Self::Usage => format!("❌ Usage Error\nUsage: {}", usage),
            Self::InvalidUsername => "❌ Invalid Username".to_string(),
        }
    }
}
