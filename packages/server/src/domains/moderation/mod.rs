//! Moderation domain - suspensions, bans and warnings placed by admins
//!
//! Entries are created and lifted by the admin workflow; this service only
//! reads the current entry and lazily deactivates suspensions that ran out.

pub mod actions;
pub mod models;

pub use actions::has_active_moderation;
pub use models::{ModerationRecord, ModerationType};
