//! `/start SAVE_<id>`: delivers a whisper into the private chat with the bot.

use crate::format::saved_text;
use async_trait::async_trait;
use lowvoice_core::{Bot, Handler, HandlerResponse, Message, Result, SendOptions};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use whisper_store::{parse_save_payload, WhisperError, WhisperStore};

pub struct SaveHandler {
    bot: Arc<dyn Bot>,
    store: WhisperStore,
    bot_username: String,
}

impl SaveHandler {
    pub fn new(bot: Arc<dyn Bot>, store: WhisperStore, bot_username: impl Into<String>) -> Self {
        Self {
            bot,
            store,
            bot_username: bot_username.into(),
        }
    }

    /// Text to send for a save request: the whisper itself or a user-facing error.
    async fn lookup(&self, message: &Message, id: &str) -> std::result::Result<String, WhisperError> {
        let whisper = self.store.get(id).await.ok_or_else(|| {
            debug!(whisper_id = %id, "Save requested for unknown whisper");
            WhisperError::Expired
        })?;
        if !whisper.is_participant(&message.user) {
            return Err(WhisperError::NotParticipant);
        }
        Ok(saved_text(&whisper))
    }
}

#[async_trait]
impl Handler for SaveHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let args = match message.command_for(&self.bot_username) {
            Some(("start", args)) => args,
            _ => return Ok(HandlerResponse::Continue),
        };
        let Some(parsed) = parse_save_payload(args) else {
            return Ok(HandlerResponse::Continue);
        };

        let outcome = match parsed {
            Ok(id) => self.lookup(message, id).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(text) => {
                info!(user_id = message.user.id, "step: SaveHandler delivering whisper");
                self.bot
                    .send_message(&message.chat, &text, SendOptions::html())
                    .await?;
                Ok(HandlerResponse::Reply(text))
            }
            Err(e) => {
                let text = e.to_string();
                info!(user_id = message.user.id, reason = %text, "step: SaveHandler refused");
                self.bot
                    .reply_to(message, &text, SendOptions::default())
                    .await?;
                Ok(HandlerResponse::Reply(text))
            }
        }
    }
}
