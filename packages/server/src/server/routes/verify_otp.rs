use axum::{extract::rejection::JsonRejection, extract::Extension, http::StatusCode, Json};
use chrono::Utc;

use crate::domains::phone_verification::{
    verify_otp, VerifyOtpOutcome, VerifyOtpRequest, VerifyOtpResponse,
};
use crate::server::app::AppState;
use crate::server::error::ApiError;

/// `POST /functions/v1/verify-otp`
///
/// 200 on success, 400 for missing fields or a rejected code, 500 when the
/// profile can't be read or updated.
pub async fn verify_otp_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<VerifyOtpRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<VerifyOtpResponse>), ApiError> {
    let Json(request) = payload?;
    let (user_id, otp_code) = request.validate()?;

    let outcome = verify_otp(&user_id, &otp_code, Utc::now(), &state.server_deps).await?;

    let response = match outcome {
        VerifyOtpOutcome::Verified => (
            StatusCode::OK,
            Json(VerifyOtpResponse::verified(outcome.message())),
        ),
        VerifyOtpOutcome::Expired | VerifyOtpOutcome::CodeMismatch => (
            StatusCode::BAD_REQUEST,
            Json(VerifyOtpResponse::rejected(outcome.message())),
        ),
    };

    Ok(response)
}
