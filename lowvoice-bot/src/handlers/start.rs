//! `/start` without a payload: introduce the bot and offer a button into inline mode.

use crate::format::INTRO_TEXT;
use async_trait::async_trait;
use lowvoice_core::{Bot, Button, Handler, HandlerResponse, Keyboard, Message, Result, SendOptions};
use std::sync::Arc;
use tracing::{info, instrument};

/// Answers a bare `/start`. `/start <payload>` continues to later handlers (deep links).
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: String,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: impl Into<String>) -> Self {
        Self {
            bot,
            bot_username: bot_username.into(),
        }
    }

    fn intro_keyboard() -> Keyboard {
        Keyboard::row(vec![Button::switch_inline_query("Start", "")])
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command_for(&self.bot_username) {
            Some(("start", "")) => {}
            _ => return Ok(HandlerResponse::Continue),
        }
        info!(user_id = message.user.id, "step: StartHandler sending intro");
        self.bot
            .reply_to(
                message,
                INTRO_TEXT,
                SendOptions::html().with_keyboard(Self::intro_keyboard()),
            )
            .await?;
        Ok(HandlerResponse::Reply(INTRO_TEXT.to_string()))
    }
}
