//! Notifications domain - order and account notifications for users
//!
//! Rows are inserted with service credentials (other services call the
//! create-order-notification handler) and read back by the owning user.

pub mod actions;
pub mod models;

pub use actions::{create_notification, CreateNotificationRequest, NotificationError};
pub use models::{NewNotification, Notification};

/// Page size for a user's notification feed
pub const FEED_LIMIT: i64 = 50;
