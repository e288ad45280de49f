//! Wraps teloxide::Bot and implements [`lowvoice_core::Bot`]. Core reply shapes are mapped onto
//! teloxide request types here; handlers never see teloxide.

use async_trait::async_trait;
use lowvoice_core::{
    parse_message_id, Bot as CoreBot, BotError, Button, ButtonAction, CallbackAnswer, Chat,
    InlineAnswer, InlineArticle, Keyboard, Result, SendOptions, TextFormat,
};
use teloxide::payloads::{AnswerCallbackQuerySetters, AnswerInlineQuerySetters, SendMessageSetters};
use teloxide::requests::Requester;
use teloxide::types::{
    CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryId,
    InlineQueryResult, InlineQueryResultArticle, InputMessageContent, InputMessageContentText,
    MessageId, ParseMode, ReplyParameters,
};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn parse_mode(format: TextFormat) -> Option<ParseMode> {
    match format {
        TextFormat::Plain => None,
        TextFormat::Html => Some(ParseMode::Html),
    }
}

fn to_button(button: &Button) -> Result<InlineKeyboardButton> {
    Ok(match &button.action {
        ButtonAction::Callback(data) => {
            InlineKeyboardButton::callback(button.text.clone(), data.clone())
        }
        ButtonAction::Url(url) => {
            let url = reqwest::Url::parse(url)
                .map_err(|e| BotError::Bot(format!("Invalid button url {}: {}", url, e)))?;
            InlineKeyboardButton::url(button.text.clone(), url)
        }
        ButtonAction::SwitchInlineQuery(query) => {
            InlineKeyboardButton::switch_inline_query(button.text.clone(), query.clone())
        }
    })
}

fn to_markup(keyboard: &Keyboard) -> Result<InlineKeyboardMarkup> {
    let rows = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(to_button).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    Ok(InlineKeyboardMarkup::new(rows))
}

fn to_article(article: &InlineArticle) -> Result<InlineQueryResult> {
    let mut content = InputMessageContentText::new(article.text.clone());
    content.parse_mode = parse_mode(article.format);

    let mut result = InlineQueryResultArticle::new(
        article.id.clone(),
        article.title.clone(),
        InputMessageContent::Text(content),
    );
    if let Some(keyboard) = &article.keyboard {
        result.reply_markup = Some(to_markup(keyboard)?);
    }
    Ok(InlineQueryResult::Article(result))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str, options: SendOptions) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if let Some(mode) = parse_mode(options.format) {
            request = request.parse_mode(mode);
        }
        if let Some(keyboard) = &options.keyboard {
            request = request.reply_markup(to_markup(keyboard)?);
        }
        if let Some(reply_to) = &options.reply_to {
            let id = parse_message_id(reply_to)?;
            request = request.reply_parameters(ReplyParameters::new(MessageId(id)));
        }
        request.await.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_inline_query(&self, query_id: &str, answer: InlineAnswer) -> Result<()> {
        let results = answer
            .results
            .iter()
            .map(to_article)
            .collect::<Result<Vec<_>>>()?;
        self.bot
            .answer_inline_query(InlineQueryId(query_id.to_string()), results)
            .cache_time(answer.cache_time_secs)
            .is_personal(answer.is_personal)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback_query(&self, query_id: &str, answer: CallbackAnswer) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(query_id.to_string()))
            .text(answer.text)
            .show_alert(answer.show_alert)
            .cache_time(answer.cache_time_secs)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
