//! Whisper entity and id.

use chrono::{DateTime, Utc};
use lowvoice_core::User;
use std::fmt;
use std::time::Duration;

/// A private message from `sender` to the user named `recipient`.
#[derive(Clone, PartialEq, Eq)]
pub struct Whisper {
    pub sender: User,
    /// Recipient username without the leading `@`.
    pub recipient: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Whisper {
    pub fn new(sender: User, recipient: impl Into<String>, content: impl Into<String>) -> Self {
        let recipient = recipient.into();
        let recipient = recipient
            .strip_prefix('@')
            .map(str::to_string)
            .unwrap_or(recipient);
        Self {
            sender,
            recipient,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// True iff `user` sent the whisper or is its recipient. Telegram usernames are case-insensitive.
    pub fn is_participant(&self, user: &User) -> bool {
        if self.sender.same_identity(user) {
            return true;
        }
        user.username
            .as_deref()
            .is_some_and(|name| name.eq_ignore_ascii_case(&self.recipient))
    }
}

// Content stays out of Debug output so whispers can be logged safely.
impl fmt::Debug for Whisper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Whisper")
            .field("sender", &self.sender.mention())
            .field("recipient", &self.recipient)
            .field("content", &format_args!("<{} chars>", self.content.chars().count()))
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Whisper identifier: `WHISPER-<unix seconds hex>-<uuid v4 simple>`.
///
/// 49 ASCII bytes, only `[A-Za-z0-9-]`, so both `SAVE_<id>` (deep link, 64 bytes max) and
/// `EXPIRE|<id>` (callback data, 64 bytes max) stay within Telegram limits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WhisperId(String);

const ID_PREFIX: &str = "WHISPER-";

impl WhisperId {
    pub fn generate() -> Self {
        let secs = Utc::now().timestamp().max(0) as u64;
        Self(format!(
            "{}{:08x}-{}",
            ID_PREFIX,
            secs,
            uuid::Uuid::new_v4().simple()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WhisperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders a TTL for humans: `30 minutes`, `1 hour`, `45 seconds`.
pub fn format_ttl(ttl: Duration) -> String {
    let secs = ttl.as_secs();
    let (n, unit) = if secs >= 3600 && secs % 3600 == 0 {
        (secs / 3600, "hour")
    } else if secs >= 60 && secs % 60 == 0 {
        (secs / 60, "minute")
    } else {
        (secs, "second")
    };
    if n == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", n, unit)
    }
}
