pub mod check_moderation;

pub use check_moderation::has_active_moderation;
