//! External collaborator boundaries.
//!
//! There is exactly one: the registration service behind
//! [`registration_client`]. Every client here is a mock that logs and
//! resolves after a simulated delay - no network calls exist in this app.

pub mod registration_client;

pub use registration_client::*;
