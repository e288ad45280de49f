//! Main entry: validate config, init logging, identify the bot, build components, dispatch.

use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::resolver::{CachedResolver, TelegramWebResolver};
use crate::telegram::{run_dispatcher, TelegramBotAdapter};
use anyhow::{Context, Result};
use lowvoice_core::init_tracing;
use std::sync::Arc;
use teloxide::prelude::Requester;
use tracing::{info, instrument};

/// Runs until Ctrl-C. getMe must succeed: inline usage texts and save links need the bot username.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    let mut bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(url) = config.telegram_api_url.as_deref() {
        bot = bot.set_api_url(reqwest::Url::parse(url)?);
    }

    let me = bot.get_me().await.context("getMe failed; check BOT_TOKEN")?;
    let bot_username = me
        .user
        .username
        .clone()
        .context("bot account has no username; inline mode requires one")?;

    let resolver = CachedResolver::new(
        TelegramWebResolver::new(&config.resolver_base_url)?,
        config.resolver_cache_size,
    );
    let components = build_bot_components(
        &config,
        Arc::new(TelegramBotAdapter::new(bot.clone())),
        Arc::new(resolver),
        bot_username.clone(),
    );

    info!(
        username = %bot_username,
        whisper_ttl_secs = config.whisper_ttl_secs,
        log_file = %config.log_file,
        "Bot started successfully"
    );

    run_dispatcher(bot, Arc::new(components)).await;

    info!("Bot stopped");
    Ok(())
}
