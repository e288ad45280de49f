//! Deep-link and callback button payloads that carry a whisper id.

use crate::error::WhisperError;
use crate::whisper::WhisperId;

/// Prefix of the `/start` payload that asks the bot to deliver a whisper privately.
pub const SAVE_PREFIX: &str = "SAVE_";

/// `/start` payload for the save deep link.
pub fn save_payload(id: &WhisperId) -> String {
    format!("{}{}", SAVE_PREFIX, id)
}

/// Extracts the whisper id from `/start` args.
///
/// `None` when the args are not a save payload at all; `Some(Err(MalformedArguments))` when the
/// prefix is present but no id follows.
pub fn parse_save_payload(args: &str) -> Option<Result<&str, WhisperError>> {
    let id = args.trim().strip_prefix(SAVE_PREFIX)?;
    if id.is_empty() {
        Some(Err(WhisperError::MalformedArguments))
    } else {
        Some(Ok(id))
    }
}

/// Action carried by a callback button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    Reveal,
    Expire,
    /// Anything else; rejected only after the whisper and caller are checked.
    Other(String),
}

impl CallbackAction {
    fn as_str(&self) -> &str {
        match self {
            Self::Reveal => "REVEAL",
            Self::Expire => "EXPIRE",
            Self::Other(s) => s,
        }
    }
}

/// Callback data `ACTION|<id>`.
pub fn callback_data(action: CallbackAction, id: &WhisperId) -> String {
    format!("{}|{}", action.as_str(), id)
}

/// Splits callback data on the first `|` into action and whisper id.
pub fn parse_callback_data(data: &str) -> Result<(CallbackAction, &str), WhisperError> {
    let (action, id) = data
        .split_once('|')
        .ok_or(WhisperError::MalformedArguments)?;
    let action = match action {
        "REVEAL" => CallbackAction::Reveal,
        "EXPIRE" => CallbackAction::Expire,
        other => CallbackAction::Other(other.to_string()),
    };
    Ok((action, id))
}
