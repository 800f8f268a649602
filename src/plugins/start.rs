//! /start command plugin.
//!
//! Handles the /start command and sends a greeting with the command list.

use async_trait::async_trait;

use super::CommandHandler;
use crate::bot::messenger::Messenger;
use crate::bot::types::InboundMessage;

pub const START_TEXT: &str = "Привет! Я тестовый бот.\n\n\
Я могу помочь вам с различными задачами.\n\n\
Доступные команды:\n\
/start - начать работу\n\
/help - помощь\n\
/info - информация о вас";

pub struct StartHandler;

#[async_trait]
impl CommandHandler for StartHandler {
    fn command(&self) -> &'static str {
        "start"
    }

    async fn handle(&self, msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()> {
        messenger.send(msg.chat_id, START_TEXT, None).await?;
        Ok(())
    }
}
