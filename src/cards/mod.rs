//! Credit-card provisioning helpers.

pub mod expiration;

pub use expiration::{ExpirationDate, ExpirationDateGenerator, SharedExpirationDateGenerator};
