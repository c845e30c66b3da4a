use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::UserId;

/// Phone verification columns of a `profiles` row
///
/// Code and expiry are written together by the code-issuing step and cleared
/// together once the phone is verified.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct ProfileVerification {
    pub id: Uuid,
    pub phone_verified: Option<bool>,
    pub phone_verification_code: Option<String>,
    pub phone_verification_expires_at: Option<DateTime<Utc>>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl ProfileVerification {
    /// Find the verification state for a user
    ///
    /// Ids that aren't UUIDs can't match a row and read as "no profile".
    pub async fn find_by_user(user_id: &UserId, pool: &PgPool) -> Result<Option<Self>> {
        let Some(id) = user_id.as_uuid() else {
            return Ok(None);
        };

        sqlx::query_as::<_, Self>(
            "SELECT id, phone_verified, phone_verification_code, phone_verification_expires_at
             FROM profiles
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Read only the `phone_verified` flag (outer `None` = no profile row)
    pub async fn find_verified_flag(user_id: &UserId, pool: &PgPool) -> Result<Option<bool>> {
        let Some(id) = user_id.as_uuid() else {
            return Ok(None);
        };

        let flag = sqlx::query_scalar::<_, Option<bool>>(
            "SELECT phone_verified FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(flag.flatten())
    }

    /// Mark the phone verified and clear the pending code in a single update
    pub async fn mark_verified(user_id: &UserId, pool: &PgPool) -> Result<()> {
        let id = user_id
            .as_uuid()
            .ok_or_else(|| anyhow::anyhow!("invalid user id: {}", user_id))?;

        sqlx::query(
            "UPDATE profiles
             SET phone_verified = true,
                 phone_verification_code = NULL,
                 phone_verification_expires_at = NULL
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Whether the pending code has lapsed at `now`
    ///
    /// A profile without an expiry has no pending code and reads as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.phone_verification_expires_at {
            Some(expires_at) => now > expires_at,
            None => true,
        }
    }

    pub fn code_matches(&self, submitted: &str) -> bool {
        self.phone_verification_code.as_deref() == Some(submitted)
    }
}
