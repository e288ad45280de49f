//! Integration tests: updates → BotComponents → MockBot.
//!
//! Drives the whole whisper lifecycle (inline query, reveal, save, expire) through the same
//! components the dispatcher uses, with a fixed resolver instead of t.me.

mod common;

use async_trait::async_trait;
use chrono::Utc;
use lowvoice_bot::{build_bot_components, BotComponents, BotConfig, UserResolver};
use lowvoice_core::{
    ButtonAction, CallbackQuery, Chat, HandlerResponse, InlineQuery, Message, TextFormat, User,
};
use std::sync::Arc;

use common::mock_bot::MockBot;

const BOT_USERNAME: &str = "lowvoicebot";

// ---------- Fixtures ----------

struct FixedResolver;

#[async_trait]
impl UserResolver for FixedResolver {
    async fn resolve(&self, username: &str) -> Option<String> {
        match username.to_lowercase().as_str() {
            "bob_smith" => Some("Bob Smith".to_string()),
            "eve_x" => Some("Eve".to_string()),
            _ => None,
        }
    }
}

fn alice() -> User {
    User {
        id: 1,
        username: Some("alice_w".to_string()),
        first_name: Some("Alice".to_string()),
        last_name: None,
    }
}

fn bob() -> User {
    User {
        id: 2,
        username: Some("Bob_Smith".to_string()),
        first_name: Some("Bob".to_string()),
        last_name: Some("Smith".to_string()),
    }
}

fn eve() -> User {
    User {
        id: 3,
        username: Some("eve_x".to_string()),
        first_name: Some("Eve".to_string()),
        last_name: None,
    }
}

fn setup() -> (Arc<MockBot>, BotComponents) {
    let bot = MockBot::new();
    let config = BotConfig::with_token("123456:test-token-abcdef");
    let components = build_bot_components(
        &config,
        bot.clone(),
        Arc::new(FixedResolver),
        BOT_USERNAME.to_string(),
    );
    (bot, components)
}

fn inline_query(from: User, query: &str) -> InlineQuery {
    InlineQuery {
        id: "iq-1".to_string(),
        from,
        query: query.to_string(),
    }
}

fn callback(from: User, data: &str) -> CallbackQuery {
    CallbackQuery {
        id: "cb-1".to_string(),
        from,
        data: Some(data.to_string()),
    }
}

fn private_message(from: User, text: &str) -> Message {
    Message {
        id: "42".to_string(),
        chat: Chat {
            id: from.id,
            chat_type: "private".to_string(),
        },
        user: from,
        content: text.to_string(),
        created_at: Utc::now(),
    }
}

/// Sends `@bob_smith <content>` from Alice and returns the whisper id from the Reveal button.
async fn whisper_to_bob(bot: &MockBot, components: &BotComponents, content: &str) -> String {
    components
        .handle_inline_query(&inline_query(alice(), &format!("@bob_smith {}", content)))
        .await;
    let answer = bot.inline_answers().pop().expect("inline answer");
    let keyboard = answer.results[0].keyboard.as_ref().expect("keyboard");
    let id = keyboard
        .buttons()
        .find_map(|b| match &b.action {
            ButtonAction::Callback(data) => data.strip_prefix("REVEAL|").map(str::to_string),
            _ => None,
        })
        .expect("reveal button");
    id
}

// ---------- Inline queries ----------

#[tokio::test]
async fn test_inline_query_offers_two_articles_and_stores_whisper() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "meet at noon").await;

    let answer = bot.inline_answers().pop().unwrap();
    assert!(answer.is_personal);
    assert_eq!(answer.cache_time_secs, 3);
    assert_eq!(answer.results.len(), 2);

    let with_save = &answer.results[0];
    let without_save = &answer.results[1];
    assert_eq!(with_save.id, format!("{}-1", id));
    assert_eq!(with_save.title, "With Save button");
    assert_eq!(without_save.id, format!("{}-2", id));
    assert_eq!(without_save.title, "Without Save button");
    assert_eq!(with_save.format, TextFormat::Html);
    assert_eq!(
        with_save.text,
        "<b>Private Message</b>\n<i>To</i> Bob Smith(@bob_smith),\nexpiring in 30 minutes."
    );
    assert!(!with_save.text.contains("meet at noon"));

    let save_url = with_save
        .keyboard
        .as_ref()
        .unwrap()
        .buttons()
        .find_map(|b| match &b.action {
            ButtonAction::Url(url) => Some(url.clone()),
            _ => None,
        })
        .expect("save button");
    assert_eq!(save_url, format!("https://t.me/{}?start=SAVE_{}", BOT_USERNAME, id));
    assert_eq!(without_save.keyboard.as_ref().unwrap().buttons().count(), 2);

    assert!(components.store.get(&id).await.is_some());
}

#[tokio::test]
async fn test_inline_query_errors_answer_usage_article() {
    let (bot, components) = setup();

    for (query, result_id) in [
        ("", "EMPTY_ARG"),
        ("   ", "USAGE_ERROR"),
        ("@bob_smith", "USAGE_ERROR"),
        ("@ab hello", "INVALID_USERNAME"),
        ("@nobody_here hello", "INVALID_USERNAME"),
    ] {
        components.handle_inline_query(&inline_query(alice(), query)).await;
        let answer = bot.inline_answers().pop().unwrap();
        assert_eq!(answer.results.len(), 1, "query {:?}", query);
        assert_eq!(answer.results[0].id, result_id, "query {:?}", query);
        assert!(!answer.is_personal);
        assert_eq!(answer.cache_time_secs, 3600);
    }
    assert!(components.store.is_empty().await);
}

#[tokio::test]
async fn test_rejected_inline_answer_stores_nothing() {
    let (bot, components) = setup();
    bot.reject_inline_answers();

    components
        .handle_inline_query(&inline_query(alice(), "@bob_smith hi"))
        .await;

    assert_eq!(bot.inline_answers().len(), 1);
    assert!(components.store.is_empty().await);
}

// ---------- Callback buttons ----------

#[tokio::test]
async fn test_reveal_shows_alert_to_participants_only() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "meet at noon").await;
    let data = format!("REVEAL|{}", id);

    components.handle_callback_query(&callback(bob(), &data)).await;
    let answer = bot.last_callback_answer();
    assert!(answer.show_alert);
    assert_eq!(answer.text, "From @alice_w to @bob_smith:\n\nmeet at noon");
    assert_eq!(answer.cache_time_secs, 30);

    components.handle_callback_query(&callback(alice(), &data)).await;
    assert!(bot.last_callback_answer().show_alert);

    components.handle_callback_query(&callback(eve(), &data)).await;
    let answer = bot.last_callback_answer();
    assert!(!answer.show_alert);
    assert_eq!(answer.text, "🚫 You are neither the sender nor recipient.");
}

#[tokio::test]
async fn test_reveal_truncates_long_whisper() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, &"x".repeat(500)).await;

    components
        .handle_callback_query(&callback(bob(), &format!("REVEAL|{}", id)))
        .await;
    let text = bot.last_callback_answer().text;
    assert_eq!(text.chars().count(), 200);
    assert!(text.ends_with('…'));
}

#[tokio::test]
async fn test_expire_removes_whisper() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "secret").await;

    components
        .handle_callback_query(&callback(eve(), &format!("EXPIRE|{}", id)))
        .await;
    assert!(components.store.get(&id).await.is_some());

    components
        .handle_callback_query(&callback(alice(), &format!("EXPIRE|{}", id)))
        .await;
    assert_eq!(bot.last_callback_answer().text, "✅ Successfully expired.");
    assert!(components.store.get(&id).await.is_none());

    components
        .handle_callback_query(&callback(bob(), &format!("REVEAL|{}", id)))
        .await;
    assert_eq!(
        bot.last_callback_answer().text,
        "⏲️🔔/❌ The message is expired or non-existent."
    );
}

#[tokio::test]
async fn test_bad_callback_data_is_answered() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "secret").await;

    components.handle_callback_query(&callback(bob(), "garbage")).await;
    assert_eq!(bot.last_callback_answer().text, "❌ Malformed arguments");

    components
        .handle_callback_query(&callback(bob(), &format!("DANCE|{}", id)))
        .await;
    assert_eq!(bot.last_callback_answer().text, "❌ Unsupported Action ❌");

    components
        .handle_callback_query(&CallbackQuery {
            id: "cb-2".to_string(),
            from: bob(),
            data: None,
        })
        .await;
    assert_eq!(bot.last_callback_answer().text, "❌ Malformed arguments");
    assert_eq!(bot.callback_answers().len(), 3);
}

// ---------- Messages ----------

#[tokio::test]
async fn test_save_delivers_whisper_to_recipient() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "a < b").await;

    let message = private_message(bob(), &format!("/start SAVE_{}", id));
    let response = components.handle_message(&message).await;
    assert!(matches!(response, Some(HandlerResponse::Reply(_))));

    let sent = bot.sent().pop().expect("saved whisper");
    assert_eq!(sent.chat_id, bob().id);
    assert_eq!(sent.options.format, TextFormat::Html);
    assert_eq!(sent.options.reply_to, None);
    assert_eq!(
        sent.text,
        "<i>Message from</i> @alice_w <i>to</i> @bob_smith:\n\na &lt; b"
    );
}

#[tokio::test]
async fn test_save_refuses_outsiders_and_unknown_ids() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "secret").await;

    components
        .handle_message(&private_message(eve(), &format!("/start SAVE_{}", id)))
        .await;
    let sent = bot.sent().pop().unwrap();
    assert_eq!(sent.text, "🚫 You are neither the sender nor recipient.");
    assert_eq!(sent.options.reply_to.as_deref(), Some("42"));

    components
        .handle_message(&private_message(bob(), "/start SAVE_WHISPER-0-missing"))
        .await;
    assert_eq!(
        bot.sent().pop().unwrap().text,
        "⏲️🔔/❌ The message is expired or non-existent."
    );

    components
        .handle_message(&private_message(bob(), "/start SAVE_"))
        .await;
    assert_eq!(bot.sent().pop().unwrap().text, "❌ Malformed arguments");
}

#[tokio::test]
async fn test_start_sends_intro_with_inline_button() {
    let (bot, components) = setup();

    components
        .handle_message(&private_message(alice(), "/start"))
        .await;

    let sent = bot.sent().pop().expect("intro");
    assert!(sent.text.contains("<b>private messages</b>"));
    assert_eq!(sent.options.format, TextFormat::Html);
    let keyboard = sent.options.keyboard.expect("keyboard");
    let button = keyboard.buttons().next().unwrap();
    assert_eq!(button.text, "Start");
    assert_eq!(button.action, ButtonAction::SwitchInlineQuery(String::new()));
}

#[tokio::test]
async fn test_ping_replies_pong() {
    let (bot, components) = setup();

    let response = components
        .handle_message(&private_message(alice(), "/ping"))
        .await;

    assert_eq!(response, Some(HandlerResponse::Reply("Pong".to_string())));
    assert_eq!(bot.sent().pop().unwrap().text, "Pong");
}

#[tokio::test]
async fn test_other_text_is_ignored() {
    let (bot, components) = setup();

    let response = components
        .handle_message(&private_message(alice(), "hello there"))
        .await;

    assert_eq!(response, Some(HandlerResponse::Continue));
    assert!(bot.sent().is_empty());
}

#[tokio::test]
async fn test_commands_for_other_bots_are_ignored() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "secret").await;

    for text in [
        "/ping@some_other_bot".to_string(),
        "/start@some_other_bot".to_string(),
        format!("/start@some_other_bot SAVE_{}", id),
    ] {
        let response = components
            .handle_message(&private_message(bob(), &text))
            .await;
        assert_eq!(response, Some(HandlerResponse::Continue), "text {:?}", text);
    }
    assert!(bot.sent().is_empty());

    let response = components
        .handle_message(&private_message(alice(), "/ping@LowVoiceBot"))
        .await;
    assert_eq!(response, Some(HandlerResponse::Reply("Pong".to_string())));
}

#[tokio::test]
async fn test_concurrent_expire_succeeds_once() {
    let (bot, components) = setup();
    let id = whisper_to_bob(&bot, &components, "secret").await;
    let data = format!("EXPIRE|{}", id);

    let by_alice = callback(alice(), &data);
    let by_bob = callback(bob(), &data);
    tokio::join!(
        components.handle_callback_query(&by_alice),
        components.handle_callback_query(&by_bob),
    );

    let texts: Vec<String> = bot.callback_answers().into_iter().map(|a| a.text).collect();
    assert_eq!(texts.len(), 2);
    assert_eq!(
        texts.iter().filter(|t| *t == "✅ Successfully expired.").count(),
        1,
        "answers: {:?}",
        texts
    );
    assert!(texts.contains(&"⏲️🔔/❌ The message is expired or non-existent.".to_string()));
}
