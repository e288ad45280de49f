//! Mock implementation of [`lowvoice_core::Bot`] for integration tests.
//!
//! Records every outgoing call so tests can assert on texts, keyboards and answers without
//! hitting Telegram. Inline answers can be made to fail to simulate a stale query id.

use async_trait::async_trait;
use lowvoice_core::{
    Bot, BotError, CallbackAnswer, Chat, InlineAnswer, Result, SendOptions,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// One recorded call to `send_message` (replies included).
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    pub options: SendOptions,
}

/// One recorded outgoing call.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Call {
    Sent(SentRecord),
    Inline { query_id: String, answer: InlineAnswer },
    Callback { query_id: String, answer: CallbackAnswer },
}

#[derive(Default)]
pub struct MockBot {
    calls: Mutex<Vec<Call>>,
    reject_inline: AtomicBool,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every following `answer_inline_query` fail.
    pub fn reject_inline_answers(&self) {
        self.reject_inline.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Sent(record) => Some(record),
                _ => None,
            })
            .collect()
    }

    pub fn inline_answers(&self) -> Vec<InlineAnswer> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Inline { answer, .. } => Some(answer),
                _ => None,
            })
            .collect()
    }

    pub fn callback_answers(&self) -> Vec<CallbackAnswer> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Callback { answer, .. } => Some(answer),
                _ => None,
            })
            .collect()
    }

    pub fn last_callback_answer(&self) -> CallbackAnswer {
        self.callback_answers()
            .pop()
            .expect("no callback answer recorded")
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str, options: SendOptions) -> Result<()> {
        self.record(Call::Sent(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            options,
        }));
        Ok(())
    }

    async fn answer_inline_query(&self, query_id: &str, answer: InlineAnswer) -> Result<()> {
        self.record(Call::Inline {
            query_id: query_id.to_string(),
            answer,
        });
        if self.reject_inline.load(Ordering::SeqCst) {
            return Err(BotError::Bot("query is too old".to_string()));
        }
        Ok(())
    }

    async fn answer_callback_query(&self, query_id: &str, answer: CallbackAnswer) -> Result<()> {
        self.record(Call::Callback {
            query_id: query_id.to_string(),
            answer,
        });
        Ok(())
    }
}
