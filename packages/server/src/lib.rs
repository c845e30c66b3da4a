// Market360 - Edge Server
//
// Server-side handlers for the Market360 marketplace: phone OTP verification,
// order notifications and the access gate guarding protected screens.
// Persistence is the hosted Postgres database, reached with service credentials.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
