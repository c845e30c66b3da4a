//! Phone verification domain - one-time codes sent by SMS
//!
//! Responsibilities:
//! - Checking a submitted code against the stored code and expiry
//! - Flipping `phone_verified` and clearing the pending code on success
//! - Reading the verified flag for the access gate
//!
//! Issuing codes (SMS delivery) happens outside this service.

pub mod actions;
pub mod models;
pub mod types;

pub use actions::{is_phone_verified, verify_otp, VerifyOtpError, VerifyOtpOutcome};
pub use types::{VerifyOtpRequest, VerifyOtpResponse};
