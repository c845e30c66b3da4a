// HTTP routes
pub mod access;
pub mod health;
pub mod notifications;
pub mod verify_otp;

pub use access::*;
pub use health::*;
pub use notifications::*;
pub use verify_otp::*;
