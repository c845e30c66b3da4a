//! Create notification action

use serde::Deserialize;
use tracing::{error, info};

use crate::common::UserId;
use crate::domains::notifications::models::NewNotification;
use crate::kernel::ServerDeps;

/// Body of `POST /functions/v1/create-order-notification`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNotificationRequest {
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub link_url: Option<String>,
    pub image_url: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("Missing required fields: user_id, type, title, body")]
    MissingFields,

    #[error("{0}")]
    Store(#[source] anyhow::Error),
}

impl CreateNotificationRequest {
    /// Check required fields and normalize the optional ones
    ///
    /// Empty URLs become `None`; a missing or null `metadata` becomes `{}`.
    pub fn validate(self) -> Result<NewNotification, NotificationError> {
        let (Some(user_id), Some(kind), Some(title), Some(body)) = (
            non_empty(self.user_id),
            non_empty(self.kind),
            non_empty(self.title),
            non_empty(self.body),
        ) else {
            return Err(NotificationError::MissingFields);
        };

        let metadata = match self.metadata {
            None | Some(serde_json::Value::Null) => serde_json::json!({}),
            Some(value) => value,
        };

        Ok(NewNotification {
            user_id: UserId::new(user_id),
            kind,
            title,
            body,
            link_url: non_empty(self.link_url),
            image_url: non_empty(self.image_url),
            metadata,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Validate and insert a single notification row
pub async fn create_notification(
    request: CreateNotificationRequest,
    deps: &ServerDeps,
) -> Result<(), NotificationError> {
    let notification = request.validate()?;

    deps.notifications
        .insert(&notification)
        .await
        .map_err(|e| {
            error!(user_id = %notification.user_id, error = %e, "Notification error");
            NotificationError::Store(e)
        })?;

    info!(
        user_id = %notification.user_id,
        kind = %notification.kind,
        "Notification created"
    );
    Ok(())
}
