//! `lowvoicebot` binary. With no subcommand it runs the bot, so a container can start it bare.

use anyhow::Result;
use clap::Parser;
use lowvoice_bot::{load_config, mask_token, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run { token: None }) {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Check { token } => {
            let config = load_config(token)?;
            config.validate()?;
            println!("bot_token: {}", mask_token(&config.bot_token));
            println!(
                "telegram_api_url: {}",
                config.telegram_api_url.as_deref().unwrap_or("(default)")
            );
            println!("log_file: {}", config.log_file);
            println!("whisper_ttl_secs: {}", config.whisper_ttl_secs);
            println!("resolver_base_url: {}", config.resolver_base_url);
            println!("resolver_cache_size: {}", config.resolver_cache_size);
            Ok(())
        }
    }
}
