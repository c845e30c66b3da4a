pub mod create_notification;

pub use create_notification::{create_notification, CreateNotificationRequest, NotificationError};
