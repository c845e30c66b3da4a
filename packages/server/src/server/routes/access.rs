use axum::{
    extract::{Extension, Query},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domains::access::{evaluate_access, AccessDecision, RedirectReason};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessResponse {
    Render,
    Redirect {
        location: String,
        reason: RedirectReason,
    },
}

impl From<AccessDecision> for AccessResponse {
    fn from(decision: AccessDecision) -> Self {
        match decision {
            AccessDecision::Render => AccessResponse::Render,
            AccessDecision::Redirect(reason) => AccessResponse::Redirect {
                location: reason.location().to_string(),
                reason,
            },
        }
    }
}

/// `GET /access?path=/orders`
///
/// Lets a single-page client run the access gate before rendering a
/// protected screen. Always 200; the decision is in the body.
pub async fn access_check_handler(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    Query(query): Query<AccessQuery>,
) -> Json<AccessResponse> {
    let user_id = auth_user.map(|Extension(user)| user.user_id);
    let path = query.path.unwrap_or_else(|| "/".to_string());

    let decision = evaluate_access(user_id.as_ref(), &path, Utc::now(), &state.server_deps).await;

    Json(decision.into())
}
