//! Logs each message in before() and the response in after(); always continues.

use async_trait::async_trait;
use lowvoice_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs ids and the command name only; message text may carry a whisper id.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            command = message.command().map(|(name, _)| name).unwrap_or("-"),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Continue | HandlerResponse::Ignore => "unhandled",
            HandlerResponse::Stop => "stopped",
            HandlerResponse::Reply(_) => "replied",
        };
        debug!(message_id = %message.id, outcome, "Processed message");
        Ok(())
    }
}
