//! /admin command plugin.
//!
//! Administrator-only variant of /info. Non-admins get a permission notice.

use async_trait::async_trait;
use tracing::info;

use super::CommandHandler;
use super::info::send_profile;
use crate::bot::messenger::Messenger;
use crate::bot::types::InboundMessage;
use crate::permissions::{AdminSet, require_admin};

pub struct AdminHandler {
    admins: AdminSet,
}

impl AdminHandler {
    pub fn new(admins: AdminSet) -> Self {
        Self { admins }
    }
}

#[async_trait]
impl CommandHandler for AdminHandler {
    fn command(&self) -> &'static str {
        "admin"
    }

    async fn handle(&self, msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()> {
        if !require_admin(msg, &self.admins, messenger).await {
            // Deny notice already sent
            return Ok(());
        }

        info!(user_id = msg.from.id, chat_id = msg.chat_id, "Admin command accepted");
        send_profile(msg, messenger).await
    }
}
