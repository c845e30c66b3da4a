pub mod queries;
pub mod verify_otp;

pub use queries::is_phone_verified;
pub use verify_otp::{verify_otp, VerifyOtpError, VerifyOtpOutcome};
