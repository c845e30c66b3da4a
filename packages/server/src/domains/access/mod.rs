//! Access domain - the route-entry gate for protected screens
//!
//! Combines the moderation and phone-verification reads into one decision.

pub mod gate;

pub use gate::{
    evaluate_access, AccessDecision, RedirectReason, LOGIN_PATH, MODERATION_PATH,
    VERIFY_PHONE_PATH,
};
