// HTTP middleware
pub mod access_gate;
pub mod cors;
pub mod jwt_auth;

pub use access_gate::*;
pub use cors::*;
pub use jwt_auth::*;
