//! Callback handler for the Reveal and Expire buttons under a whisper placeholder.

use crate::format::{reveal_text, EXPIRED_OK_TEXT};
use lowvoice_core::{Bot, CallbackAnswer, CallbackQuery, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use whisper_store::{parse_callback_data, CallbackAction, WhisperError, WhisperStore};

const REVEAL_CACHE_SECS: u32 = 30;
const EXPIRE_CACHE_SECS: u32 = 1800;
const ERROR_CACHE_SECS: u32 = 1800;

pub struct WhisperCallbackHandler {
    bot: Arc<dyn Bot>,
    store: WhisperStore,
}

impl WhisperCallbackHandler {
    pub fn new(bot: Arc<dyn Bot>, store: WhisperStore) -> Self {
        Self { bot, store }
    }

    /// Answers every callback query exactly once, with the result or a user-facing error toast.
    #[instrument(skip(self, query), fields(user_id = query.from.id))]
    pub async fn handle(&self, query: &CallbackQuery) -> Result<()> {
        let answer = match self.process(query).await {
            Ok(answer) => answer,
            Err(e) => {
                debug!(data = ?query.data, reason = %e, "Callback refused");
                CallbackAnswer::toast(e.to_string(), ERROR_CACHE_SECS)
            }
        };
        self.bot.answer_callback_query(&query.id, answer).await
    }

    async fn process(&self, query: &CallbackQuery) -> std::result::Result<CallbackAnswer, WhisperError> {
        let data = query
            .data
            .as_deref()
            .ok_or(WhisperError::MalformedArguments)?;
        let (action, id) = parse_callback_data(data)?;
        let whisper = self.store.get(id).await.ok_or(WhisperError::Expired)?;
        if !whisper.is_participant(&query.from) {
            return Err(WhisperError::NotParticipant);
        }

        match action {
            CallbackAction::Reveal => {
                info!(whisper_id = %id, "step: whisper revealed");
                Ok(CallbackAnswer::alert(reveal_text(&whisper), REVEAL_CACHE_SECS))
            }
            CallbackAction::Expire => {
                // The timer may have removed it since the lookup above.
                self.store.expire(id).await.ok_or(WhisperError::Expired)?;
                info!(whisper_id = %id, "step: whisper expired by participant");
                Ok(CallbackAnswer::toast(EXPIRED_OK_TEXT, EXPIRE_CACHE_SECS))
            }
            CallbackAction::Other(_) => Err(WhisperError::UnsupportedAction),
        }
    }
}
