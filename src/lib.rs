#![doc(test(attr(deny(warnings))))]

//! Movement Core exports banking movements to JSON, renders them into PDF
//! reports, and generates credit-card expiration dates.

pub mod cards;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod report;
pub mod storage;
pub mod utils;

use std::sync::Once;

use once_cell::sync::Lazy;

pub use errors::{FailurePolicy, MovementError, Result};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Movement Core tracing initialized.");
    });
}

/// Compile-time metadata captured by the build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

static BUILD_INFO: Lazy<BuildInfo> = Lazy::new(|| BuildInfo {
    version: env!("CARGO_PKG_VERSION"),
    git_hash: env!("MOVEMENT_CORE_BUILD_HASH"),
    timestamp: env!("MOVEMENT_CORE_BUILD_TIMESTAMP"),
    target: env!("MOVEMENT_CORE_BUILD_TARGET"),
    profile: env!("MOVEMENT_CORE_BUILD_PROFILE"),
});

pub fn build_info() -> &'static BuildInfo {
    &BUILD_INFO
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }

    #[test]
    fn build_info_is_populated() {
        let info = super::build_info();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(!info.git_hash.is_empty());
    }
}
