//! Plain text (non-command) messages.

use crate::bot::messenger::Messenger;
use crate::bot::types::InboundMessage;

/// Reply for messages that mention a subscription.
pub const SUBSCRIPTION_TEXT: &str =
    "О, опять про подписку? 😏\nПо вопросам подписки напишите администратору бота.";

const SUBSCRIPTION_KEYWORD: &str = "подпис";

/// Reply text for a plain message: a canned answer for subscription
/// questions, an echo for everything else.
pub fn reply_for(text: &str) -> String {
    if text.to_lowercase().contains(SUBSCRIPTION_KEYWORD) {
        SUBSCRIPTION_TEXT.to_string()
    } else {
        format!("Вы написали: {}", text)
    }
}

/// Answer a plain text message with exactly one reply.
pub async fn handle_text(msg: &InboundMessage, messenger: &dyn Messenger) -> anyhow::Result<()> {
    messenger.send(msg.chat_id, &reply_for(&msg.text), None).await?;
    Ok(())
}
