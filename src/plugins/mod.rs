//! Plugin system for command handlers.
//!
//! Add new plugins by:
//! 1. Creating a new file in this directory implementing [`CommandHandler`]
//! 2. Adding `pub mod your_plugin;` below
//! 3. Adding the handler to `default_handlers()`

pub mod admin;
pub mod help;
pub mod info;
pub mod start;

use std::sync::Arc;

use async_trait::async_trait;

use crate::bot::messenger::Messenger;
use crate::bot::types::InboundMessage;
use crate::permissions::AdminSet;

/// A command plugin.
///
/// `command()` is the registry key, so it must be stable and lowercase
/// without the leading `/`.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    fn command(&self) -> &'static str;

    /// Handle one message carrying this command. Fails only if sending fails.
    async fn handle(&self, msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()>;
}

/// All built-in command plugins, in registration order.
pub fn default_handlers(admins: AdminSet) -> Vec<Arc<dyn CommandHandler>> {
    vec![
        Arc::new(start::StartHandler),
        Arc::new(help::HelpHandler),
        Arc::new(info::InfoHandler),
        Arc::new(admin::AdminHandler::new(admins)),
    ]
}
