// PostgresStore - implements the Base* store traits against the hosted database
//
// Thin adapter: SQL stays in the domain models, this only forwards the pool.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::common::{ModerationId, UserId};
use crate::domains::moderation::models::ModerationRecord;
use crate::domains::notifications::models::{NewNotification, Notification};
use crate::domains::phone_verification::models::ProfileVerification;
use crate::kernel::{BaseHealthProbe, BaseModerationStore, BaseNotificationStore, BaseProfileStore};

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseProfileStore for PostgresStore {
    async fn find_verification(&self, user_id: &UserId) -> Result<Option<ProfileVerification>> {
        ProfileVerification::find_by_user(user_id, &self.pool).await
    }

    async fn is_phone_verified(&self, user_id: &UserId) -> Result<bool> {
        let flag = ProfileVerification::find_verified_flag(user_id, &self.pool).await?;
        Ok(flag.unwrap_or(false))
    }

    async fn mark_phone_verified(&self, user_id: &UserId) -> Result<()> {
        ProfileVerification::mark_verified(user_id, &self.pool).await
    }
}

#[async_trait]
impl BaseModerationStore for PostgresStore {
    async fn find_current(&self, user_id: &UserId) -> Result<Option<ModerationRecord>> {
        ModerationRecord::find_current_for_user(user_id, &self.pool).await
    }

    async fn deactivate(&self, id: ModerationId) -> Result<()> {
        ModerationRecord::deactivate(id, &self.pool).await
    }
}

#[async_trait]
impl BaseNotificationStore for PostgresStore {
    async fn insert(&self, notification: &NewNotification) -> Result<()> {
        notification.insert(&self.pool).await.map(|_| ())
    }

    async fn list_for_user(&self, user_id: &UserId, limit: i64) -> Result<Vec<Notification>> {
        Notification::find_recent_for_user(user_id, limit, &self.pool).await
    }
}

#[async_trait]
impl BaseHealthProbe for PostgresStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
