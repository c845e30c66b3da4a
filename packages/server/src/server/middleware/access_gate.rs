use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use tracing::debug;

use crate::domains::access::{evaluate_access, AccessDecision};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// Route guard for protected routes
///
/// Runs the access gate for the request path and either passes the request
/// through or answers with a temporary redirect. Must sit inside
/// `jwt_auth_middleware` so that `AuthUser` is already populated.
pub async fn require_access(
    Extension(state): Extension<AppState>,
    auth_user: Option<Extension<AuthUser>>,
    request: Request,
    next: Next,
) -> Response {
    let user_id = auth_user.map(|Extension(user)| user.user_id);
    let path = request.uri().path().to_string();

    match evaluate_access(user_id.as_ref(), &path, Utc::now(), &state.server_deps).await {
        AccessDecision::Render => next.run(request).await,
        AccessDecision::Redirect(reason) => {
            debug!(path = %path, reason = ?reason, "Access gate redirect");
            Redirect::temporary(reason.location()).into_response()
        }
    }
}
