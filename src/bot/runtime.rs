//! Bot runtime - long polling loop.

use std::time::Duration;

use futures::StreamExt;
use teloxide::prelude::*;
use teloxide::update_listeners::{AsUpdateStream, Polling};
use tracing::{info, warn};

use super::messenger::TelegramMessenger;
use super::router::Router;
use super::types::InboundUpdate;
use crate::config::Config;

/// Poll Telegram and feed every update through the router, one at a time.
///
/// Runs until the polling stream ends or Ctrl+C is received.
pub async fn run(config: &Config, bot: Bot, router: Router) {
    let messenger = TelegramMessenger::new(bot.clone());

    let mut listener = Polling::builder(bot)
        .timeout(Duration::from_secs(config.poll_timeout))
        .build();

    let updates = listener.as_stream().filter_map(|result| async move {
        match result {
            Ok(update) => InboundUpdate::from_telegram(&update),
            Err(e) => {
                warn!(error = %e, "Polling failed");
                None
            }
        }
    });

    info!(
        timeout_secs = config.poll_timeout,
        commands = ?router.dispatcher().commands(),
        "Starting bot in polling mode..."
    );

    tokio::select! {
        _ = router.run(updates, &messenger) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }
}
