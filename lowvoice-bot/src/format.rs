//! User-visible texts. HTML texts escape every user-controlled part.

use std::time::Duration;
use teloxide::utils::html;
use whisper_store::{format_ttl, Whisper};

/// Telegram's limit for callback query answer text.
pub const CALLBACK_TEXT_LIMIT: usize = 200;

pub const INTRO_TEXT: &str =
    "Low Voice Bot helps send <b>private messages</b> in public groups.";

pub const PONG_TEXT: &str = "Pong";

pub const EXPIRED_OK_TEXT: &str = "✅ Successfully expired.";

/// Placeholder posted to the group in place of the whisper.
pub fn placeholder_text(recipient_name: &str, recipient: &str, ttl: Duration) -> String {
    format!(
        "<b>Private Message</b>\n<i>To</i> {}(@{}),\nexpiring in {}.",
        html::escape(recipient_name),
        html::escape(recipient),
        format_ttl(ttl)
    )
}

/// Whisper delivered to a private chat through the save deep link.
pub fn saved_text(whisper: &Whisper) -> String {
    format!(
        "<i>Message from</i> {} <i>to</i> @{}:\n\n{}",
        html::escape(&whisper.sender.mention()),
        html::escape(&whisper.recipient),
        html::escape(&whisper.content)
    )
}

/// Plain-text alert shown by the reveal button, cut to the callback answer limit.
pub fn reveal_text(whisper: &Whisper) -> String {
    let text = format!(
        "From {} to @{}:\n\n{}",
        whisper.sender.mention(),
        whisper.recipient,
        whisper.content
    );
    truncate_chars(&text, CALLBACK_TEXT_LIMIT)
}

/// Keeps at most `max` chars; a cut string ends with `…` within the limit.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
