//! Update router.
//!
//! Consumes updates one at a time and sends each to the dispatcher, the
//! plain text handler or the callback handler. A failing update is logged
//! and never stops the loop.

use futures::{Stream, StreamExt};
use tracing::{error, info};

use super::dispatcher::Dispatcher;
use super::messenger::Messenger;
use super::types::{CallbackEvent, InboundMessage, InboundUpdate};
use crate::events;

pub struct Router {
    dispatcher: Dispatcher,
}

impl Router {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process updates sequentially until the stream ends.
    pub async fn run<S>(&self, updates: S, messenger: &dyn Messenger)
    where
        S: Stream<Item = InboundUpdate>,
    {
        futures::pin_mut!(updates);
        while let Some(update) = updates.next().await {
            self.handle_update(update, messenger).await;
        }
        info!("Update stream ended");
    }

    /// Route a single update.
    pub async fn handle_update(&self, update: InboundUpdate, messenger: &dyn Messenger) {
        match update {
            InboundUpdate::Callback(q) => self.on_callback(&q, messenger).await,
            InboundUpdate::Command(msg) => self.on_command(&msg, messenger).await,
            InboundUpdate::Text(msg) => self.on_text(&msg, messenger).await,
        }
    }

    async fn on_callback(&self, q: &CallbackEvent, messenger: &dyn Messenger) {
        info!(
            user_id = q.from.id,
            data = q.data.as_deref().unwrap_or_default(),
            "Callback query"
        );

        if let Err(e) = events::handle_callback(q, messenger).await {
            error!(error = %e, user_id = q.from.id, "Callback handling failed");
        }
    }

    async fn on_command(&self, msg: &InboundMessage, messenger: &dyn Messenger) {
        info!(
            command = msg.command.as_deref().unwrap_or_default(),
            username = msg.from.username.as_deref().unwrap_or_default(),
            user_id = msg.from.id,
            chat_id = msg.chat_id,
            "Command received"
        );

        if let Err(e) = self.dispatcher.handle_command(msg, messenger).await {
            error!(error = %e, user_id = msg.from.id, chat_id = msg.chat_id, "Command handling failed");
        }
    }

    async fn on_text(&self, msg: &InboundMessage, messenger: &dyn Messenger) {
        if msg.text.is_empty() {
            return;
        }

        info!(
            username = msg.from.username.as_deref().unwrap_or_default(),
            user_id = msg.from.id,
            text = %msg.text,
            "Message received"
        );

        if let Err(e) = events::handle_text(msg, messenger).await {
            error!(error = %e, user_id = msg.from.id, chat_id = msg.chat_id, "Message handling failed");
        }
    }
}
