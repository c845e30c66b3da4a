//! Auth domain - identity of the caller
//!
//! Sign-in itself happens on the platform's auth service; this service only
//! verifies the access tokens it issues.

pub mod jwt;

pub use jwt::{Claims, JwtService};
