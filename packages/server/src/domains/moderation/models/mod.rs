pub mod moderation;

pub use moderation::{ModerationRecord, ModerationType};
