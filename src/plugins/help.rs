//! /help command plugin.

use async_trait::async_trait;

use super::CommandHandler;
use crate::bot::messenger::{Messenger, TextFormat};
use crate::bot::types::InboundMessage;

pub fn get_text() -> &'static str {
    "Это справочная информация.\n\n\
    <b>Доступные команды:</b>\n\n\
    /start - начать работу с ботом\n\
    /help - показать эту справку\n\
    /info - информация о вашем профиле\n\n\
    Бот написан на Rust с помощью teloxide."
}

pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    fn command(&self) -> &'static str {
        "help"
    }

    async fn handle(&self, msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()> {
        messenger
            .send(msg.chat_id, get_text(), Some(TextFormat::Html))
            .await?;
        Ok(())
    }
}
