use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::Serialize;
use tracing::error;

use crate::domains::notifications::{
    create_notification, CreateNotificationRequest, Notification, FEED_LIMIT,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

#[derive(Serialize)]
pub struct CreateNotificationResponse {
    success: bool,
}

/// `POST /functions/v1/create-order-notification`
pub async fn create_notification_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CreateNotificationRequest>, JsonRejection>,
) -> Result<Json<CreateNotificationResponse>, ApiError> {
    let Json(request) = payload?;

    create_notification(request, &state.server_deps).await?;

    Ok(Json(CreateNotificationResponse { success: true }))
}

/// `GET /me/notifications` - the caller's feed, newest first
pub async fn list_my_notifications_handler(
    Extension(state): Extension<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    let notifications = state
        .server_deps
        .notifications
        .list_for_user(&user.user_id, FEED_LIMIT)
        .await
        .map_err(|e| {
            error!(user_id = %user.user_id, error = %e, "Error loading notifications");
            ApiError::Internal(e.to_string())
        })?;

    Ok(Json(notifications))
}
