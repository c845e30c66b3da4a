// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - each method is a single remote call
// against the hosted database. Decisions built on top of them (expiry checks,
// gate precedence) live in the domain actions.
//
// Naming convention: Base* for trait names (e.g., BaseProfileStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{ModerationId, UserId};
use crate::domains::moderation::models::ModerationRecord;
use crate::domains::notifications::models::{NewNotification, Notification};
use crate::domains::phone_verification::models::ProfileVerification;

// =============================================================================
// Profiles (phone verification state)
// =============================================================================

#[async_trait]
pub trait BaseProfileStore: Send + Sync {
    /// Stored code, expiry and verified flag for a user (`None` if there is no profile)
    async fn find_verification(&self, user_id: &UserId) -> Result<Option<ProfileVerification>>;

    /// The `phone_verified` flag; a missing profile or a null flag reads as `false`
    async fn is_phone_verified(&self, user_id: &UserId) -> Result<bool>;

    /// Set `phone_verified = true` and clear code + expiry in one update
    async fn mark_phone_verified(&self, user_id: &UserId) -> Result<()>;
}

// =============================================================================
// Moderation
// =============================================================================

#[async_trait]
pub trait BaseModerationStore: Send + Sync {
    /// Most recently created entry with `is_active = true`
    async fn find_current(&self, user_id: &UserId) -> Result<Option<ModerationRecord>>;

    /// Set `is_active = false` on one entry
    async fn deactivate(&self, id: ModerationId) -> Result<()>;
}

// =============================================================================
// Notifications
// =============================================================================

#[async_trait]
pub trait BaseNotificationStore: Send + Sync {
    async fn insert(&self, notification: &NewNotification) -> Result<()>;

    /// Newest first
    async fn list_for_user(&self, user_id: &UserId, limit: i64) -> Result<Vec<Notification>>;
}

// =============================================================================
// Health
// =============================================================================

#[async_trait]
pub trait BaseHealthProbe: Send + Sync {
    async fn ping(&self) -> Result<()>;
}
