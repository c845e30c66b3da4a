//! Typed ID definitions for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use uuid::Uuid;

pub use super::id::Id;

/// Marker type for moderation entries (`user_moderation` rows).
pub struct Moderation;

/// Marker type for notification rows.
pub struct Notification;

pub type ModerationId = Id<Moderation>;

pub type NotificationId = Id<Notification>;

/// Identity of an account as issued by the platform's auth service.
///
/// Kept opaque: callers submit it as a string and it is only interpreted as a
/// UUID at the SQL boundary (see [`UserId::as_uuid`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The id as a UUID, or `None` when it can't match any database row.
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }
}
