//! Active moderation check

use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

use crate::common::UserId;
use crate::kernel::ServerDeps;

/// Whether the user's current moderation entry blocks access at `now`.
///
/// A lapsed suspension is deactivated on the spot and does not block. Read
/// failures are logged and treated as "no moderation found" (fail open).
pub async fn has_active_moderation(user_id: &UserId, now: DateTime<Utc>, deps: &ServerDeps) -> bool {
    let record = match deps.moderation.find_current(user_id).await {
        Ok(Some(record)) => record,
        Ok(None) => return false,
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Error checking moderation");
            return false;
        }
    };

    if !record.is_lapsed_suspension(now) {
        return true;
    }

    info!(user_id = %user_id, moderation_id = %record.id, "Suspension expired, deactivating");
    if let Err(e) = deps.moderation.deactivate(record.id).await {
        warn!(moderation_id = %record.id, error = %e, "Failed to deactivate expired suspension");
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::moderation::models::ModerationType;
    use crate::kernel::test_dependencies::{MockModerationStore, TestDependencies};
    use chrono::Duration;

    #[tokio::test]
    async fn test_no_entry_is_unmoderated() {
        let deps = TestDependencies::new().server_deps();
        assert!(!has_active_moderation(&UserId::new("u1"), Utc::now(), &deps).await);
    }

    #[tokio::test]
    async fn test_ban_and_warning_block() {
        let now = Utc::now();
        for moderation_type in [ModerationType::Ban, ModerationType::Warning] {
            let user = UserId::new("u1");
            let test_deps = TestDependencies::new().with_moderation(
                MockModerationStore::new().with_entry(&user, moderation_type, None),
            );
            let deps = test_deps.server_deps();

            assert!(has_active_moderation(&user, now, &deps).await);
            assert!(test_deps.moderation.deactivated().is_empty());
        }
    }

    #[tokio::test]
    async fn test_permanent_suspension_blocks() {
        let user = UserId::new("u1");
        let test_deps = TestDependencies::new().with_moderation(
            MockModerationStore::new().with_entry(&user, ModerationType::Suspension, None),
        );

        assert!(has_active_moderation(&user, Utc::now(), &test_deps.server_deps()).await);
    }

    #[tokio::test]
    async fn test_lapsed_suspension_is_deactivated() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let test_deps = TestDependencies::new().with_moderation(
            MockModerationStore::new().with_entry(
                &user,
                ModerationType::Suspension,
                Some(now - Duration::minutes(1)),
            ),
        );
        let deps = test_deps.server_deps();

        assert!(!has_active_moderation(&user, now, &deps).await);
        assert_eq!(test_deps.moderation.deactivated().len(), 1);

        // Nothing active remains for the next check
        assert!(!has_active_moderation(&user, now, &deps).await);
        assert_eq!(test_deps.moderation.deactivated().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_deactivation_still_lets_user_through() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let test_deps = TestDependencies::new().with_moderation(
            MockModerationStore::new()
                .with_entry(&user, ModerationType::Suspension, Some(now - Duration::days(1)))
                .failing_writes(),
        );

        assert!(!has_active_moderation(&user, now, &test_deps.server_deps()).await);
    }

    #[tokio::test]
    async fn test_unknown_kind_blocks_even_past_expiry() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let test_deps = TestDependencies::new().with_moderation(
            MockModerationStore::new().with_entry(&user, "shadow_ban", Some(now - Duration::days(1))),
        );

        assert!(has_active_moderation(&user, now, &test_deps.server_deps()).await);
        assert!(test_deps.moderation.deactivated().is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_fails_open() {
        let user = UserId::new("u1");
        let test_deps = TestDependencies::new().with_moderation(
            MockModerationStore::new()
                .with_entry(&user, ModerationType::Ban, None)
                .failing_reads(),
        );

        assert!(!has_active_moderation(&user, Utc::now(), &test_deps.server_deps()).await);
    }
}
