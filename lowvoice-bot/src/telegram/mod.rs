//! Telegram transport: update adapters, [`lowvoice_core::Bot`] implementation and the dispatcher.

mod adapters;
mod bot_adapter;
mod dispatcher;

pub use adapters::{
    TelegramCallbackQueryWrapper, TelegramInlineQueryWrapper, TelegramMessageWrapper,
    TelegramUserWrapper,
};
pub use bot_adapter::TelegramBotAdapter;
pub use dispatcher::run_dispatcher;
