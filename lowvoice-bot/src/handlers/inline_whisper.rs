//! Inline query handler: turns `@bot @recipient text` into a whisper.
//!
//! The answer offers two articles (with and without the Save button). The whisper is stored only
//! once Telegram accepts the answer; a rejected answer (stale query) leaves nothing behind.

use crate::format::placeholder_text;
use crate::resolver::UserResolver;
use lowvoice_core::{
    Bot, Button, InlineAnswer, InlineArticle, InlineQuery, Keyboard, Result, TextFormat,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};
use whisper_store::{
    callback_data, is_valid_username, parse_query, save_payload, CallbackAction, InlineError,
    Whisper, WhisperId, WhisperStore,
};

/// Cache time for the two whisper articles; short so every query gets a fresh whisper id.
const WHISPER_CACHE_SECS: u32 = 3;
/// Cache time for usage / error articles.
const ERROR_CACHE_SECS: u32 = 3600;

pub struct InlineWhisperHandler {
    bot: Arc<dyn Bot>,
    store: WhisperStore,
    resolver: Arc<dyn UserResolver>,
    bot_username: String,
    ttl: Duration,
}

/// A whisper ready to be stored once its answer is accepted.
struct Prepared {
    id: WhisperId,
    whisper: Whisper,
    recipient_name: String,
    answer: InlineAnswer,
}

impl InlineWhisperHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: WhisperStore,
        resolver: Arc<dyn UserResolver>,
        bot_username: String,
        ttl: Duration,
    ) -> Self {
        Self {
            bot,
            store,
            resolver,
            bot_username,
            ttl,
        }
    }

    #[instrument(skip(self, query), fields(user_id = query.from.id))]
    pub async fn handle(&self, query: &InlineQuery) -> Result<()> {
        let prepared = match self.prepare(query).await {
            Ok(prepared) => prepared,
            Err(e) => {
                debug!(error = %e, "Answering inline query with usage article");
                return self.answer_error(query, e).await;
            }
        };

        let Prepared {
            id,
            whisper,
            recipient_name,
            answer,
        } = prepared;
        match self.bot.answer_inline_query(&query.id, answer).await {
            Ok(()) => {
                info!(
                    whisper_id = %id,
                    "From {} to {}(@{}): WHISPER_REDACTED",
                    whisper.sender.mention(),
                    recipient_name,
                    whisper.recipient
                );
                self.store.insert(id, whisper, self.ttl).await;
            }
            Err(e) => {
                debug!(error = %e, whisper_id = %id, "Inline answer rejected; whisper discarded");
            }
        }
        Ok(())
    }

    async fn prepare(&self, query: &InlineQuery) -> std::result::Result<Prepared, InlineError> {
        let request = parse_query(&query.query)?;
        if !is_valid_username(&request.recipient) {
            return Err(InlineError::InvalidUsername);
        }
        let recipient_name = self
            .resolver
            .resolve(&request.recipient)
            .await
            .ok_or(InlineError::InvalidUsername)?;

        let id = WhisperId::generate();
        let whisper = Whisper::new(query.from.clone(), request.recipient, request.content);
        let text = placeholder_text(&recipient_name, &whisper.recipient, self.ttl);
        let answer = InlineAnswer {
            results: self.articles(&id, &text),
            cache_time_secs: WHISPER_CACHE_SECS,
            is_personal: true,
        };
        Ok(Prepared {
            id,
            whisper,
            recipient_name,
            answer,
        })
    }

    fn articles(&self, id: &WhisperId, text: &str) -> Vec<InlineArticle> {
        let reveal = Button::callback("🔎 Reveal", callback_data(CallbackAction::Reveal, id));
        let save = Button::url(
            "💾 Save",
            format!("https://t.me/{}?start={}", self.bot_username, save_payload(id)),
        );
        let expire = Button::callback("🛑 Expire", callback_data(CallbackAction::Expire, id));

        let article = |suffix: u8, title: &str, buttons: Vec<Button>| InlineArticle {
            id: format!("{}-{}", id, suffix),
            title: title.to_string(),
            text: text.to_string(),
            format: TextFormat::Html,
            keyboard: Some(Keyboard::row(buttons)),
        };
        vec![
            article(
                1,
                "With Save button",
                vec![reveal.clone(), save, expire.clone()],
            ),
            article(2, "Without Save button", vec![reveal, expire]),
        ]
    }

    async fn answer_error(&self, query: &InlineQuery, error: InlineError) -> Result<()> {
        let answer = InlineAnswer {
            results: vec![InlineArticle {
                id: error.result_id().to_string(),
                title: error.title().to_string(),
                text: error.text(&self.bot_username),
                format: TextFormat::Html,
                keyboard: None,
            }],
            cache_time_secs: ERROR_CACHE_SECS,
            is_personal: false,
        };
        if let Err(e) = self.bot.answer_inline_query(&query.id, answer).await {
            debug!(error = %e, "Inline error answer rejected");
        }
        Ok(())
    }
}
