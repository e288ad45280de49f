use lowvoice_core::{
    CallbackQuery, Chat, InlineQuery, Message, ToCoreCallbackQuery, ToCoreInlineQuery,
    ToCoreMessage, ToCoreUser, User,
};

/// Telegram user to core user.
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Telegram message to core message. Non-text messages get empty content.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: chat_type(&self.0.chat).to_string(),
            },
            content: self.0.text().unwrap_or("").to_string(),
            created_at: self.0.date,
        }
    }
}

fn chat_type(chat: &teloxide::types::Chat) -> &'static str {
    if chat.is_private() {
        "private"
    } else if chat.is_group() {
        "group"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    }
}

/// Telegram inline query to core inline query.
pub struct TelegramInlineQueryWrapper<'a>(pub &'a teloxide::types::InlineQuery);

impl<'a> ToCoreInlineQuery for TelegramInlineQueryWrapper<'a> {
    fn to_core(&self) -> InlineQuery {
        InlineQuery {
            id: self.0.id.to_string(),
            from: TelegramUserWrapper(&self.0.from).to_core(),
            query: self.0.query.clone(),
        }
    }
}

/// Telegram callback query to core callback query. Game callbacks carry no data.
pub struct TelegramCallbackQueryWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreCallbackQuery for TelegramCallbackQueryWrapper<'a> {
    fn to_core(&self) -> CallbackQuery {
        CallbackQuery {
            id: self.0.id.to_string(),
            from: TelegramUserWrapper(&self.0.from).to_core(),
            data: self.0.data.clone(),
        }
    }
}
