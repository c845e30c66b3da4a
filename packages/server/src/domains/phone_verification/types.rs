//! Request and response payloads for the verify-otp handler

use serde::{Deserialize, Serialize};

use crate::common::UserId;
use crate::domains::phone_verification::actions::VerifyOtpError;

/// Body of `POST /functions/v1/verify-otp`
///
/// Fields are optional so that a missing field is reported as a validation
/// error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyOtpRequest {
    pub user_id: Option<String>,
    pub otp_code: Option<String>,
}

impl VerifyOtpRequest {
    /// Both fields must be present and non-empty
    pub fn validate(self) -> Result<(UserId, String), VerifyOtpError> {
        match (self.user_id, self.otp_code) {
            (Some(user_id), Some(otp_code)) if !user_id.is_empty() && !otp_code.is_empty() => {
                Ok((UserId::new(user_id), otp_code))
            }
            _ => Err(VerifyOtpError::MissingFields),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyOtpResponse {
    pub fn verified(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            error: None,
        }
    }

    pub fn rejected(error: &str) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}
