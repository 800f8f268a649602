//! Command dispatcher.
//!
//! Maps command names to [`CommandHandler`]s. Built once at startup and
//! read-only while the bot runs.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use super::messenger::Messenger;
use super::types::InboundMessage;
use crate::plugins::CommandHandler;

/// Reply for commands nobody registered.
pub const UNKNOWN_COMMAND_TEXT: &str =
    "Неизвестная команда. Используйте /help для списка доступных команд.";

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its own command name. Last registration wins.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        let command = handler.command();
        if self.handlers.insert(command, handler).is_some() {
            warn!(command, "Replaced existing handler for /{}", command);
        } else {
            info!(command, "Registered handler for /{}", command);
        }
    }

    /// Registered command names, sorted.
    pub fn commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Route a command message to its handler.
    ///
    /// Unknown commands get [`UNKNOWN_COMMAND_TEXT`] and are not an error.
    /// Handler errors are logged and returned; nothing is retried.
    pub async fn handle_command(
        &self,
        msg: &InboundMessage,
        messenger: &dyn Messenger,
    ) -> anyhow::Result<()> {
        let command = msg.command.as_deref().unwrap_or_default();

        let Some(handler) = self.handlers.get(command) else {
            return self.handle_unknown_command(msg, messenger).await;
        };

        if let Err(e) = handler.handle(msg, messenger).await {
            error!(
                error = %e,
                command,
                user_id = msg.from.id,
                chat_id = msg.chat_id,
                "Command handler failed"
            );
            return Err(e);
        }

        Ok(())
    }

    async fn handle_unknown_command(
        &self,
        msg: &InboundMessage,
        messenger: &dyn Messenger,
    ) -> anyhow::Result<()> {
        messenger.send(msg.chat_id, UNKNOWN_COMMAND_TEXT, None).await?;
        Ok(())
    }
}
