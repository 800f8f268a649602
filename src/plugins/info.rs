//! /info command plugin.
//!
//! Shows the caller their own Telegram profile.

use async_trait::async_trait;

use super::CommandHandler;
use crate::bot::messenger::{Messenger, TextFormat};
use crate::bot::types::{InboundMessage, User};
use crate::utils::html_escape;

/// Render a user's profile as an HTML card.
///
/// Absent or empty fields get no line at all.
pub fn format_profile(user: &User) -> String {
    let mut text = String::from("<b>Информация о вас:</b>\n\n");
    text.push_str(&format!("<b>ID:</b> <code>{}</code>\n", user.id));

    if !user.first_name.is_empty() {
        text.push_str(&format!("<b>Имя:</b> {}\n", html_escape(&user.first_name)));
    }
    if let Some(last_name) = non_empty(&user.last_name) {
        text.push_str(&format!("<b>Фамилия:</b> {}\n", html_escape(last_name)));
    }
    if let Some(username) = non_empty(&user.username) {
        text.push_str(&format!("<b>Username:</b> @{}\n", html_escape(username)));
    }
    if let Some(lang) = non_empty(&user.language_code) {
        text.push_str(&format!("<b>Язык:</b> {}\n", html_escape(lang)));
    }
    text.push_str(&format!("<b>Бот:</b> {}\n", user.is_bot));

    text
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Send the profile card of the message sender.
pub async fn send_profile(msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()> {
    let text = format_profile(&msg.from);
    messenger
        .send(msg.chat_id, &text, Some(TextFormat::Html))
        .await?;
    Ok(())
}

pub struct InfoHandler;

#[async_trait]
impl CommandHandler for InfoHandler {
    fn command(&self) -> &'static str {
        "info"
    }

    async fn handle(&self, msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()> {
        send_profile(msg, messenger).await
    }
}
