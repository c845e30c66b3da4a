pub mod access;
pub mod auth;
pub mod moderation;
pub mod notifications;
pub mod phone_verification;
