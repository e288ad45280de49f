//! Bot abstraction for sending messages and answering queries.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in `lowvoice-bot`.
//! Tests substitute a recording implementation.

use crate::error::Result;
use crate::reply::{CallbackAnswer, InlineAnswer, SendOptions};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Outgoing side of the bot. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str, options: SendOptions) -> Result<()>;

    /// Sends a reply to the given message (same chat, quoting it).
    async fn reply_to(&self, message: &Message, text: &str, options: SendOptions) -> Result<()> {
        let options = SendOptions {
            reply_to: Some(message.id.clone()),
            ..options
        };
        self.send_message(&message.chat, text, options).await
    }

    /// Answers an inline query. An error usually means the query id is stale or invalid.
    async fn answer_inline_query(&self, query_id: &str, answer: InlineAnswer) -> Result<()>;

    /// Answers a callback query with a toast or alert.
    async fn answer_callback_query(&self, query_id: &str, answer: CallbackAnswer) -> Result<()>;
}

/// Parses a transport message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| crate::error::BotError::Bot(format!("Invalid message_id: {}", s)))
}
