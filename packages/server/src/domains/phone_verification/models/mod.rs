pub mod profile;

pub use profile::ProfileVerification;
