pub mod json_backend;

use std::path::Path;

use crate::{domain::Movement, errors::Result};

/// Abstraction over backends that move movement lists in and out of files.
pub trait MovementStorage: Send + Sync {
    /// Writes `movements` to `destination`, preserving their order.
    fn export_json(&self, destination: &Path, movements: &[Movement]) -> Result<()>;

    /// Reads the ordered movement list stored at `source`.
    fn import_json(&self, source: &Path) -> Result<Vec<Movement>>;
}

pub use json_backend::{read_movements, write_movements, JsonMovementStorage};
