//! HTTP error mapping
//!
//! Every failure leaves the service as `{"error": "<message>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::domains::notifications::NotificationError;
use crate::domains::phone_verification::VerifyOtpError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{0}")]
    Validation(String),

    /// No matching account; reported as 500 like other lookup failures
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<VerifyOtpError> for ApiError {
    fn from(err: VerifyOtpError) -> Self {
        match err {
            VerifyOtpError::MissingFields => ApiError::Validation(err.to_string()),
            VerifyOtpError::ProfileNotFound => ApiError::NotFound(err.to_string()),
            VerifyOtpError::UpdateFailed(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<NotificationError> for ApiError {
    fn from(err: NotificationError) -> Self {
        match err {
            NotificationError::MissingFields => ApiError::Validation(err.to_string()),
            NotificationError::Store(_) => ApiError::Internal(err.to_string()),
        }
    }
}
