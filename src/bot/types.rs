//! Transport-independent update types.
//!
//! Everything the routing core sees is built here from teloxide types, so
//! handlers never touch the Telegram API directly.

use teloxide::types::{CallbackQuery, Message, Update, UpdateKind};

use super::command::extract_command;

/// The user an update came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
    pub is_bot: bool,
}

impl From<&teloxide::types::User> for User {
    fn from(user: &teloxide::types::User) -> Self {
        Self {
            id: user.id.0,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            language_code: user.language_code.clone(),
            is_bot: user.is_bot,
        }
    }
}

/// A text message as seen by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub from: User,
    pub text: String,
    /// Bare command name (`start` for `/start@bot arg`), if the text is a command.
    pub command: Option<String>,
}

impl InboundMessage {
    /// Build a message, extracting the command name from `text`.
    pub fn new(chat_id: i64, from: User, text: impl Into<String>) -> Self {
        let text = text.into();
        let command = extract_command(&text).map(str::to_owned);
        Self {
            chat_id,
            from,
            text,
            command,
        }
    }

    pub fn is_command(&self) -> bool {
        self.command.is_some()
    }
}

/// Where a pressed button lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallbackOrigin {
    pub chat_id: i64,
    pub message_id: i32,
}

/// An inline button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackEvent {
    pub id: String,
    pub from: User,
    pub data: Option<String>,
    /// `None` when the message carrying the button is no longer reachable.
    pub origin: Option<CallbackOrigin>,
}

impl From<&CallbackQuery> for CallbackEvent {
    fn from(q: &CallbackQuery) -> Self {
        Self {
            id: q.id.clone(),
            from: User::from(&q.from),
            data: q.data.clone(),
            origin: q.message.as_ref().map(|m| CallbackOrigin {
                chat_id: m.chat().id.0,
                message_id: m.id().0,
            }),
        }
    }
}

/// One routable update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundUpdate {
    Command(InboundMessage),
    Text(InboundMessage),
    Callback(CallbackEvent),
}

impl InboundUpdate {
    /// Classify a text message as a command or plain text.
    pub fn from_message(message: InboundMessage) -> Self {
        if message.is_command() {
            Self::Command(message)
        } else {
            Self::Text(message)
        }
    }

    /// Convert a raw Telegram update.
    ///
    /// Returns `None` for update kinds the bot does not route, for messages
    /// without a sender (channel posts) and for messages without text.
    pub fn from_telegram(update: &Update) -> Option<Self> {
        match &update.kind {
            UpdateKind::Message(msg) => Self::from_telegram_message(msg),
            UpdateKind::CallbackQuery(q) => Some(Self::Callback(CallbackEvent::from(q))),
            _ => None,
        }
    }

    fn from_telegram_message(msg: &Message) -> Option<Self> {
        let from = User::from(msg.from.as_ref()?);
        let text = msg.text()?;
        Some(Self::from_message(InboundMessage::new(msg.chat.id.0, from, text)))
    }
}
