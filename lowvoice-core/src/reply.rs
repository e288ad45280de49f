//! Outgoing reply shapes: text format, inline keyboards, inline query results and callback answers.
//!
//! These mirror the subset of the Telegram Bot API the whisper bot needs, without depending on a
//! transport crate. The Telegram adapter maps them onto teloxide types.

use serde::{Deserialize, Serialize};

/// How the transport should interpret message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextFormat {
    #[default]
    Plain,
    Html,
}

/// What pressing a button does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Sends a callback query carrying this data (max 64 bytes on Telegram).
    Callback(String),
    /// Opens the URL.
    Url(String),
    /// Switches the user to inline mode in a chat of their choice with this query prefilled.
    SwitchInlineQuery(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub action: ButtonAction,
}

impl Button {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Callback(data.into()),
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::Url(url.into()),
        }
    }

    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: ButtonAction::SwitchInlineQuery(query.into()),
        }
    }
}

/// Inline keyboard: rows of buttons.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Keyboard with a single row.
    pub fn row(buttons: Vec<Button>) -> Self {
        Self {
            rows: vec![buttons],
        }
    }

    /// All buttons, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }
}

/// Options for `send_message` / `reply_to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub format: TextFormat,
    pub keyboard: Option<Keyboard>,
    /// Transport message id to reply to; set by `reply_to`.
    pub reply_to: Option<String>,
}

impl SendOptions {
    pub fn html() -> Self {
        Self {
            format: TextFormat::Html,
            ..Default::default()
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// One article result of an inline query; choosing it posts `text` with `keyboard` attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Option<Keyboard>,
}

/// Full answer to an inline query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineAnswer {
    pub results: Vec<InlineArticle>,
    /// How long clients and servers may cache this answer.
    pub cache_time_secs: u32,
    /// Cache per user instead of for everyone sending the same query.
    pub is_personal: bool,
}

/// Answer to a callback query: a toast, or a modal alert when `show_alert` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackAnswer {
    pub text: String,
    pub show_alert: bool,
    pub cache_time_secs: u32,
}

impl CallbackAnswer {
    pub fn toast(text: impl Into<String>, cache_time_secs: u32) -> Self {
        Self {
            text: text.into(),
            show_alert: false,
            cache_time_secs,
        }
    }

    pub fn alert(text: impl Into<String>, cache_time_secs: u32) -> Self {
        Self {
            text: text.into(),
            show_alert: true,
            cache_time_secs,
        }
    }
}
