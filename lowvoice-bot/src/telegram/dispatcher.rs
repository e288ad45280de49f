//! Dispatcher: routes messages, inline queries and callback queries to [`BotComponents`].

use crate::components::BotComponents;
use lowvoice_core::{ToCoreCallbackQuery, ToCoreInlineQuery, ToCoreMessage};
use std::sync::Arc;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::types::{CallbackQuery, InlineQuery, Message, Update};
use teloxide::RequestError;
use tracing::{debug, info, instrument};

use super::adapters::{
    TelegramCallbackQueryWrapper, TelegramInlineQueryWrapper, TelegramMessageWrapper,
};

async fn on_message(msg: Message, components: Arc<BotComponents>) -> Result<(), RequestError> {
    if msg.text().is_none() {
        debug!(chat_id = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    }
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    components.handle_message(&core_msg).await;
    Ok(())
}

async fn on_inline_query(
    query: InlineQuery,
    components: Arc<BotComponents>,
) -> Result<(), RequestError> {
    let core_query = TelegramInlineQueryWrapper(&query).to_core();
    components.handle_inline_query(&core_query).await;
    Ok(())
}

async fn on_callback_query(
    query: CallbackQuery,
    components: Arc<BotComponents>,
) -> Result<(), RequestError> {
    let core_query = TelegramCallbackQueryWrapper(&query).to_core();
    components.handle_callback_query(&core_query).await;
    Ok(())
}

/// Long-polls until Ctrl-C. Handler failures are logged inside [`BotComponents`], so endpoints
/// always succeed.
#[instrument(skip(bot, components))]
pub async fn run_dispatcher(bot: teloxide::Bot, components: Arc<BotComponents>) {
    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_inline_query().endpoint(on_inline_query))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    info!("Starting dispatcher");
    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![components])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}
