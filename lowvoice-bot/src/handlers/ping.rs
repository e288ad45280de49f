//! `/ping` health check.

use crate::format::PONG_TEXT;
use async_trait::async_trait;
use lowvoice_core::{Bot, Handler, HandlerResponse, Message, Result, SendOptions};
use std::sync::Arc;

pub struct PingHandler {
    bot: Arc<dyn Bot>,
    bot_username: String,
}

impl PingHandler {
    pub fn new(bot: Arc<dyn Bot>, bot_username: impl Into<String>) -> Self {
        Self {
            bot,
            bot_username: bot_username.into(),
        }
    }
}

#[async_trait]
impl Handler for PingHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !matches!(message.command_for(&self.bot_username), Some(("ping", _))) {
            return Ok(HandlerResponse::Continue);
        }
        self.bot
            .reply_to(message, PONG_TEXT, SendOptions::default())
            .await?;
        Ok(HandlerResponse::Reply(PONG_TEXT.to_string()))
    }
}
