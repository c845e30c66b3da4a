use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::common::{NotificationId, UserId};

/// Notification record - shown in the user's notification feed
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: Uuid,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub body: String,
    pub link_url: Option<String>,
    pub image_url: Option<String>,
    pub metadata: serde_json::Value,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated notification, ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub user_id: UserId,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub link_url: Option<String>,
    pub image_url: Option<String>,
    pub metadata: serde_json::Value,
}

impl NewNotification {
    pub async fn insert(&self, pool: &PgPool) -> Result<Notification> {
        let user_id = self
            .user_id
            .as_uuid()
            .ok_or_else(|| anyhow!("invalid input syntax for type uuid: \"{}\"", self.user_id))?;

        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (user_id, type, title, body, link_url, image_url, metadata)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *",
        )
        .bind(user_id)
        .bind(&self.kind)
        .bind(&self.title)
        .bind(&self.body)
        .bind(&self.link_url)
        .bind(&self.image_url)
        .bind(&self.metadata)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

impl Notification {
    /// Find a user's most recent notifications
    pub async fn find_recent_for_user(
        user_id: &UserId,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let Some(user_id) = user_id.as_uuid() else {
            return Ok(Vec::new());
        };

        sqlx::query_as::<_, Notification>(
            "SELECT * FROM notifications
             WHERE user_id = $1
             ORDER BY created_at DESC
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
