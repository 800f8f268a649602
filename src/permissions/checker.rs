//! Administrator allow-list checks.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::bot::messenger::Messenger;
use crate::bot::types::InboundMessage;

/// Sent to anyone who calls an admin-only command without being an admin.
pub const DENY_TEXT: &str = "У вас нет прав для выполнения этой команды.";

/// Immutable set of administrator user IDs.
///
/// Built once at startup from `ADMIN_IDS`; cloning shares the same set.
#[derive(Clone, Debug, Default)]
pub struct AdminSet {
    ids: Arc<HashSet<u64>>,
}

impl AdminSet {
    pub fn new(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: Arc::new(ids.into_iter().collect()),
        }
    }

    #[inline]
    pub fn contains(&self, user_id: u64) -> bool {
        self.ids.contains(&user_id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// IDs in ascending order, for logging.
    pub fn sorted(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Check if a user is an administrator.
#[inline]
pub fn is_admin(user_id: u64, admins: &AdminSet) -> bool {
    admins.contains(user_id)
}

/// Gate an admin-only action.
///
/// Returns `true` if the sender is an admin. Otherwise sends [`DENY_TEXT`] to
/// the chat and returns `false`; the caller must stop handling the message.
/// A failed deny send is logged, not returned.
pub async fn require_admin(
    msg: &InboundMessage,
    admins: &AdminSet,
    messenger: &dyn Messenger,
) -> bool {
    if is_admin(msg.from.id, admins) {
        return true;
    }

    debug!(user_id = msg.from.id, chat_id = msg.chat_id, "Denied admin-only command");
    if let Err(e) = messenger.send(msg.chat_id, DENY_TEXT, None).await {
        warn!(
            error = %e,
            user_id = msg.from.id,
            chat_id = msg.chat_id,
            "Failed to send permission notice"
        );
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::testing::{RecordingMessenger, message, user};

    #[test]
    fn test_is_admin_membership() {
        let admins = AdminSet::new([10, 20]);
        assert!(is_admin(10, &admins));
        assert!(is_admin(20, &admins));
        assert!(!is_admin(30, &admins));
    }

    #[test]
    fn test_is_admin_empty_set() {
        let admins = AdminSet::default();
        assert!(admins.is_empty());
        assert!(!is_admin(0, &admins));
        assert!(!is_admin(10, &admins));
    }

    #[test]
    fn test_sorted_dedups() {
        let admins = AdminSet::new([30, 10, 30, 20]);
        assert_eq!(admins.sorted(), vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_require_admin_allows_admin_silently() {
        let messenger = RecordingMessenger::new();
        let admins = AdminSet::new([5]);

        assert!(require_admin(&message(user(5), "/admin"), &admins, &messenger).await);
        assert!(messenger.calls().is_empty());
    }

    #[tokio::test]
    async fn test_require_admin_denies_with_one_notice() {
        let messenger = RecordingMessenger::new();
        let admins = AdminSet::new([5]);

        assert!(!require_admin(&message(user(6), "/admin"), &admins, &messenger).await);
        assert_eq!(messenger.sent_texts(), vec![DENY_TEXT.to_string()]);
        assert_eq!(messenger.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_require_admin_deny_send_failure_still_denies() {
        let messenger = RecordingMessenger::failing();
        let admins = AdminSet::default();

        assert!(!require_admin(&message(user(6), "/admin"), &admins, &messenger).await);
        assert_eq!(messenger.calls().len(), 1);
    }
}
