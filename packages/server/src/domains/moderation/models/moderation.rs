use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ModerationId, UserId};

/// Moderation kinds the admin workflow writes
///
/// The column is read as text, so a kind missing here still loads and still
/// blocks access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationType {
    Suspension,
    Ban,
    Warning,
}

impl ModerationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationType::Suspension => "suspension",
            ModerationType::Ban => "ban",
            ModerationType::Warning => "warning",
        }
    }
}

impl From<ModerationType> for String {
    fn from(moderation_type: ModerationType) -> Self {
        moderation_type.as_str().to_string()
    }
}

/// Entry in `user_moderation`, created by the admin moderation workflow
#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRecord {
    pub id: ModerationId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub moderation_type: String,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>, // None = no end date
    pub created_at: DateTime<Utc>,
}

impl ModerationRecord {
    /// Find the user's current entry: the most recently created active one
    pub async fn find_current_for_user(user_id: &UserId, pool: &PgPool) -> Result<Option<Self>> {
        let Some(user_id) = user_id.as_uuid() else {
            return Ok(None);
        };

        sqlx::query_as::<_, Self>(
            "SELECT id, type::text AS type, is_active, expires_at, created_at
             FROM user_moderation
             WHERE user_id = $1 AND is_active = true
             ORDER BY created_at DESC
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn deactivate(id: ModerationId, pool: &PgPool) -> Result<()> {
        sqlx::query("UPDATE user_moderation SET is_active = false WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// A suspension whose end date has passed; every other kind never lapses
    pub fn is_lapsed_suspension(&self, now: DateTime<Utc>) -> bool {
        self.moderation_type == ModerationType::Suspension.as_str()
            && matches!(self.expires_at, Some(expires_at) if expires_at < now)
    }
}
