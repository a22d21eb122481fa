use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type that captures movement export, import, and report failures.
#[derive(Debug, Error)]
pub enum MovementError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Report error: {0}")]
    Report(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MovementError>;

impl From<printpdf::Error> for MovementError {
    fn from(err: printpdf::Error) -> Self {
        MovementError::Report(err.to_string())
    }
}

/// Decides what a failed export, import, or report returns to the caller.
///
/// `Lenient` logs the failure and hands back the operation's fallback value
/// (nothing for writes, an empty list for imports). `Strict` propagates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Lenient,
    Strict,
}

impl FailurePolicy {
    /// Applies the policy to the outcome of `operation` against `target`.
    pub fn settle<T>(
        self,
        operation: &str,
        target: &Path,
        result: Result<T>,
        fallback: impl FnOnce() -> T,
    ) -> Result<T> {
        match (result, self) {
            (Ok(value), _) => Ok(value),
            (Err(err), FailurePolicy::Strict) => Err(err),
            (Err(err), FailurePolicy::Lenient) => {
                tracing::error!(
                    "{} failed for `{}`: {}",
                    operation,
                    target.display(),
                    err
                );
                Ok(fallback())
            }
        }
    }

    pub fn is_strict(self) -> bool {
        matches!(self, FailurePolicy::Strict)
    }
}
