//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::ServerDeps;
use crate::server::middleware::{
    allow_headers_layer, allow_origin_layer, jwt_auth_middleware, preflight, require_access,
};
use crate::server::routes::{
    access_check_handler, create_notification_handler, health_handler,
    list_my_notifications_handler, verify_otp_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
}

/// Build the Axum application router
///
/// Routes:
/// - `POST /functions/v1/verify-otp` and `POST /functions/v1/create-order-notification`
///   (called with service or user tokens; no gate)
/// - `GET /access` - access gate decision as JSON
/// - `GET /me/notifications` - behind the access gate
/// - `GET /health`
pub fn build_app(server_deps: ServerDeps, jwt_service: JwtService) -> Router {
    let app_state = AppState {
        server_deps: Arc::new(server_deps),
        jwt_service: Arc::new(jwt_service),
    };

    // Clone jwt_service for middleware closure
    let jwt_service_for_middleware = app_state.jwt_service.clone();

    let protected = Router::new()
        .route("/me/notifications", get(list_my_notifications_handler))
        .route_layer(middleware::from_fn(require_access));

    Router::new()
        .route("/functions/v1/verify-otp", post(verify_otp_handler))
        .route(
            "/functions/v1/create-order-notification",
            post(create_notification_handler),
        )
        .route("/access", get(access_check_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(middleware::from_fn(preflight))
        .layer(allow_origin_layer())
        .layer(allow_headers_layer())
        .layer(TraceLayer::new_for_http())
}
