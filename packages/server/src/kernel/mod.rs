//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod postgres;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use postgres::PostgresStore;
pub use test_dependencies::TestDependencies;
pub use traits::*;
