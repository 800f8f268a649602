//! Herald - Telegram command bot
//!
//! Polls Telegram for updates and routes them to command, text or callback
//! handlers. Some commands are restricted to a fixed set of administrators.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `permissions` - Administrator allow-list
//! - `bot` - Dispatcher, update router and polling runtime
//! - `plugins` - Command handlers (extensible)
//! - `events` - Plain text and callback handlers
//! - `utils` - Utility functions

mod bot;
mod config;
mod events;
mod permissions;
mod plugins;
mod utils;

use anyhow::Context;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bot::{Dispatcher, Router};
use config::Config;
use permissions::AdminSet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first; a bad config aborts before anything starts
    let config = Config::from_env().context("Failed to load configuration")?;

    // If RUST_LOG is not set, derive the filter from LOG_LEVEL / BOT_DEBUG
    let default_filter = if config.debug {
        "herald=debug,teloxide=debug".to_string()
    } else {
        format!("herald={},teloxide=warn", config.log_level)
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting Herald bot...");
    info!(?config, "Configuration loaded successfully");

    let admins = AdminSet::new(config.admin_ids.iter().copied());
    if admins.is_empty() {
        info!("No admin IDs configured (ADMIN_IDS is empty)");
    } else {
        info!("Bot admins: {:?}", admins.sorted());
    }

    let bot = Bot::new(&config.bot_token);

    let me = bot.get_me().await.context("Failed to authorize with Telegram")?;
    info!("Authorized as @{}", me.username());

    let mut dispatcher = Dispatcher::new();
    for handler in plugins::default_handlers(admins) {
        dispatcher.register(handler);
    }

    bot::run(&config, bot, Router::new(dispatcher)).await;

    info!("Bot stopped");
    Ok(())
}
