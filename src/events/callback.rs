//! Inline button callbacks.
//!
//! Payloads are plain strings matched by prefix, then exactly:
//! - `delete_profile_yes` / `delete_profile_no`
//! - `lang_ru` / `lang_en`
//!
//! Anything else is acknowledged and otherwise ignored.

use tracing::{debug, warn};

use crate::bot::messenger::Messenger;
use crate::bot::types::CallbackEvent;

const DELETE_PROFILE_PREFIX: &str = "delete_profile_";
const LANG_PREFIX: &str = "lang_";

/// What a known payload asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackIntent {
    DeleteProfileConfirmed,
    DeleteProfileCancelled,
    LanguageRussian,
    LanguageEnglish,
}

impl CallbackIntent {
    /// Resolve a payload. Unknown payloads, including unknown suffixes after a
    /// known prefix, resolve to `None`.
    pub fn parse(data: &str) -> Option<Self> {
        if let Some(choice) = data.strip_prefix(DELETE_PROFILE_PREFIX) {
            return match choice {
                "yes" => Some(Self::DeleteProfileConfirmed),
                "no" => Some(Self::DeleteProfileCancelled),
                _ => None,
            };
        }

        if let Some(lang) = data.strip_prefix(LANG_PREFIX) {
            return match lang {
                "ru" => Some(Self::LanguageRussian),
                "en" => Some(Self::LanguageEnglish),
                _ => None,
            };
        }

        None
    }

    pub fn reply_text(self) -> &'static str {
        match self {
            Self::DeleteProfileConfirmed => "✅ Профиль удалён!",
            Self::DeleteProfileCancelled => "❌ Удаление отменено.",
            Self::LanguageRussian => "✅ Выбран язык: Русский",
            Self::LanguageEnglish => "✅ Выбран язык: English",
        }
    }
}

/// Handle a button press.
///
/// Always acknowledges the callback first, exactly once. A known intent then
/// edits the message carrying the button, or messages the presser directly
/// if that message is gone.
pub async fn handle_callback(q: &CallbackEvent, messenger: &dyn Messenger) -> anyhow::Result<()> {
    if let Err(e) = messenger.answer_callback(&q.id).await {
        warn!(error = %e, user_id = q.from.id, "Failed to answer callback query");
    }

    let data = q.data.as_deref().unwrap_or_default();
    let Some(intent) = CallbackIntent::parse(data) else {
        debug!(user_id = q.from.id, data, "Ignoring unknown callback payload");
        return Ok(());
    };

    let text = intent.reply_text();
    match q.origin {
        Some(origin) => messenger.edit(origin.chat_id, origin.message_id, text).await?,
        None => messenger.send(q.from.id as i64, text, None).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::testing::{Outgoing, RecordingMessenger, user};
    use crate::bot::types::CallbackOrigin;

    fn press(data: Option<&str>, origin: Option<CallbackOrigin>) -> CallbackEvent {
        CallbackEvent {
            id: "cb-1".to_string(),
            from: user(11),
            data: data.map(str::to_string),
            origin,
        }
    }

    const ORIGIN: CallbackOrigin = CallbackOrigin {
        chat_id: 11,
        message_id: 77,
    };

    #[test]
    fn test_parse_intents() {
        assert_eq!(
            CallbackIntent::parse("delete_profile_yes"),
            Some(CallbackIntent::DeleteProfileConfirmed)
        );
        assert_eq!(
            CallbackIntent::parse("delete_profile_no"),
            Some(CallbackIntent::DeleteProfileCancelled)
        );
        assert_eq!(CallbackIntent::parse("lang_ru"), Some(CallbackIntent::LanguageRussian));
        assert_eq!(CallbackIntent::parse("lang_en"), Some(CallbackIntent::LanguageEnglish));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(CallbackIntent::parse("delete_profile_unknown"), None);
        assert_eq!(CallbackIntent::parse("delete_profile_"), None);
        assert_eq!(CallbackIntent::parse("lang_de"), None);
        assert_eq!(CallbackIntent::parse("yes"), None);
        assert_eq!(CallbackIntent::parse(""), None);
    }

    #[tokio::test]
    async fn test_confirm_acks_then_edits() {
        let messenger = RecordingMessenger::new();
        handle_callback(&press(Some("delete_profile_yes"), Some(ORIGIN)), &messenger)
            .await
            .unwrap();

        assert_eq!(
            messenger.calls(),
            vec![
                Outgoing::Answer {
                    callback_id: "cb-1".to_string()
                },
                Outgoing::Edit {
                    chat_id: 11,
                    message_id: 77,
                    text: "✅ Профиль удалён!".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_payload_only_acks() {
        let messenger = RecordingMessenger::new();
        handle_callback(&press(Some("delete_profile_unknown"), Some(ORIGIN)), &messenger)
            .await
            .unwrap();

        assert_eq!(
            messenger.calls(),
            vec![Outgoing::Answer {
                callback_id: "cb-1".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_missing_payload_only_acks() {
        let messenger = RecordingMessenger::new();
        handle_callback(&press(None, Some(ORIGIN)), &messenger).await.unwrap();
        assert_eq!(messenger.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_inaccessible_origin_messages_presser() {
        let messenger = RecordingMessenger::new();
        handle_callback(&press(Some("lang_en"), None), &messenger)
            .await
            .unwrap();

        assert_eq!(messenger.calls().len(), 2);
        assert_eq!(messenger.sent_texts(), vec!["✅ Выбран язык: English".to_string()]);
    }

    #[tokio::test]
    async fn test_edit_failure_is_returned() {
        let messenger = RecordingMessenger::failing();
        let result = handle_callback(&press(Some("delete_profile_no"), Some(ORIGIN)), &messenger).await;
        assert!(result.is_err());
    }
}
