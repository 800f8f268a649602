//! Outbound capability used by every handler.
//!
//! [`Messenger`] is transport-agnostic; [`TelegramMessenger`] implements it
//! with teloxide. Tests substitute a recording implementation.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId, ParseMode};
use thiserror::Error;

/// Rich-text mode applied to a whole outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Html,
}

impl From<TextFormat> for ParseMode {
    fn from(format: TextFormat) -> Self {
        match format {
            TextFormat::Html => ParseMode::Html,
        }
    }
}

/// An outbound call to the platform failed.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("failed to send message to chat {chat_id}: {reason}")]
    Delivery { chat_id: i64, reason: String },

    #[error("failed to edit message {message_id} in chat {chat_id}: {reason}")]
    Edit {
        chat_id: i64,
        message_id: i32,
        reason: String,
    },

    #[error("failed to answer callback {callback_id}: {reason}")]
    Callback { callback_id: String, reason: String },
}

/// Sending, editing and callback acknowledgement.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver a new message to a chat.
    async fn send(
        &self,
        chat_id: i64,
        text: &str,
        format: Option<TextFormat>,
    ) -> Result<(), SendError>;

    /// Replace the text of a message the bot sent earlier.
    async fn edit(&self, chat_id: i64, message_id: i32, text: &str) -> Result<(), SendError>;

    /// Clear the loading indicator on a pressed button. Call at most once per callback.
    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError>;
}

/// Teloxide-backed [`Messenger`].
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send(
        &self,
        chat_id: i64,
        text: &str,
        format: Option<TextFormat>,
    ) -> Result<(), SendError> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(format) = format {
            request = request.parse_mode(ParseMode::from(format));
        }

        request.await.map_err(|e| SendError::Delivery {
            chat_id,
            reason: e.to_string(),
        })?;
        Ok(())
    }

    async fn edit(&self, chat_id: i64, message_id: i32, text: &str) -> Result<(), SendError> {
        self.bot
            .edit_message_text(ChatId(chat_id), MessageId(message_id), text)
            .await
            .map_err(|e| SendError::Edit {
                chat_id,
                message_id,
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError> {
        self.bot
            .answer_callback_query(callback_id)
            .await
            .map_err(|e| SendError::Callback {
                callback_id: callback_id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}
