//! Component factory: builds the handlers from config and injected collaborators. Isolates
//! assembly from the runner so tests can drive every update kind with a mock [`Bot`].

use crate::config::BotConfig;
use crate::handlers::{
    InlineWhisperHandler, LoggingHandler, PingHandler, SaveHandler, StartHandler,
    WhisperCallbackHandler,
};
use crate::resolver::UserResolver;
use handler_chain::HandlerChain;
use lowvoice_core::{Bot, CallbackQuery, HandlerResponse, InlineQuery, Message};
use std::sync::Arc;
use tracing::{error, instrument};
use whisper_store::WhisperStore;

/// Everything the dispatcher needs to serve updates.
pub struct BotComponents {
    pub bot_username: String,
    pub store: WhisperStore,
    pub handler_chain: HandlerChain,
    pub inline_handler: InlineWhisperHandler,
    pub callback_handler: WhisperCallbackHandler,
}

impl BotComponents {
    /// Runs the message chain; failures are logged, never propagated to the transport.
    pub async fn handle_message(&self, message: &Message) -> Option<HandlerResponse> {
        match self.handler_chain.handle(message).await {
            Ok(response) => Some(response),
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Handler chain failed");
                None
            }
        }
    }

    pub async fn handle_inline_query(&self, query: &InlineQuery) {
        if let Err(e) = self.inline_handler.handle(query).await {
            error!(error = %e, user_id = query.from.id, "Inline query handling failed");
        }
    }

    pub async fn handle_callback_query(&self, query: &CallbackQuery) {
        if let Err(e) = self.callback_handler.handle(query).await {
            error!(error = %e, user_id = query.from.id, "Callback query handling failed");
        }
    }
}

/// Builds components around a shared [`WhisperStore`]. `bot_username` is the bot's own username
/// (from getMe), used in usage texts and save deep links.
#[instrument(skip(config, bot, resolver))]
pub fn build_bot_components(
    config: &BotConfig,
    bot: Arc<dyn Bot>,
    resolver: Arc<dyn UserResolver>,
    bot_username: String,
) -> BotComponents {
    let store = WhisperStore::new();

    let handler_chain = HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(StartHandler::new(bot.clone(), &bot_username)))
        .add_handler(Arc::new(SaveHandler::new(
            bot.clone(),
            store.clone(),
            &bot_username,
        )))
        .add_handler(Arc::new(PingHandler::new(bot.clone(), &bot_username)));

    let inline_handler = InlineWhisperHandler::new(
        bot.clone(),
        store.clone(),
        resolver,
        bot_username.clone(),
        config.whisper_ttl(),
    );
    let callback_handler = WhisperCallbackHandler::new(bot, store.clone());

    BotComponents {
        bot_username,
        store,
        handler_chain,
        inline_handler,
        callback_handler,
    }
}
