//! Parsing of the inline query `@RECIPIENT message`.

use crate::error::InlineError;

/// A well-formed whisper request taken from an inline query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhisperRequest {
    /// Recipient username without the leading `@`.
    pub recipient: String,
    pub content: String,
}

/// Splits the query on the first whitespace run: recipient, then the message.
///
/// The message keeps its trailing whitespace; leading whitespace is dropped.
pub fn parse_query(query: &str) -> Result<WhisperRequest, InlineError> {
    if query.is_empty() {
        return Err(InlineError::EmptyQuery);
    }
    let (head, rest) = query
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or(InlineError::Usage)?;
    let content = rest.trim_start();
    if content.is_empty() {
        return Err(InlineError::Usage);
    }
    let recipient = head.strip_prefix('@').unwrap_or(head);
    Ok(WhisperRequest {
        recipient: recipient.to_string(),
        content: content.to_string(),
    })
}

/// Telegram username rules: 5-32 chars of `[A-Za-z0-9_]`, starting with a letter.
pub fn is_valid_username(username: &str) -> bool {
    let len = username.len();
    (5..=32).contains(&len)
        && username.starts_with(|c: char| c.is_ascii_alphabetic())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
