//! Recording [`Messenger`] for unit tests.
//!
//! Records every outbound call in order so tests can assert on exactly what
//! the bot would have sent, without hitting Telegram.

use async_trait::async_trait;
use parking_lot::Mutex;

use super::messenger::{Messenger, SendError, TextFormat};
use super::types::{InboundMessage, User};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outgoing {
    Send {
        chat_id: i64,
        text: String,
        format: Option<TextFormat>,
    },
    Edit {
        chat_id: i64,
        message_id: i32,
        text: String,
    },
    Answer {
        callback_id: String,
    },
}

#[derive(Default)]
pub struct RecordingMessenger {
    calls: Mutex<Vec<Outgoing>>,
    fail_sends: bool,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A messenger whose `send` and `edit` always fail. Callback answers still succeed.
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    pub fn calls(&self) -> Vec<Outgoing> {
        self.calls.lock().clone()
    }

    /// Texts of all `send` calls, in order.
    pub fn sent_texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter_map(|c| match c {
                Outgoing::Send { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(
        &self,
        chat_id: i64,
        text: &str,
        format: Option<TextFormat>,
    ) -> Result<(), SendError> {
        self.calls.lock().push(Outgoing::Send {
            chat_id,
            text: text.to_string(),
            format,
        });
        if self.fail_sends {
            return Err(SendError::Delivery {
                chat_id,
                reason: "transport unavailable".to_string(),
            });
        }
        Ok(())
    }

    async fn edit(&self, chat_id: i64, message_id: i32, text: &str) -> Result<(), SendError> {
        self.calls.lock().push(Outgoing::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
        });
        if self.fail_sends {
            return Err(SendError::Edit {
                chat_id,
                message_id,
                reason: "transport unavailable".to_string(),
            });
        }
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SendError> {
        self.calls.lock().push(Outgoing::Answer {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }
}

/// A regular user with a first name only.
pub fn user(id: u64) -> User {
    User {
        id,
        first_name: "Ivan".to_string(),
        last_name: None,
        username: None,
        language_code: Some("ru".to_string()),
        is_bot: false,
    }
}

/// A private-chat message from `user`.
pub fn message(from: User, text: &str) -> InboundMessage {
    InboundMessage::new(from.id as i64, from, text)
}
