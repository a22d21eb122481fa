use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use crate::{
    domain::Movement,
    errors::{FailurePolicy, Result},
    utils::ensure_parent_dir,
};

use super::MovementStorage;

/// JSON file persistence for movement lists.
///
/// Failures are routed through the configured [`FailurePolicy`]; the default
/// lenient policy logs them and returns the fallback value instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMovementStorage {
    policy: FailurePolicy,
}

impl JsonMovementStorage {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::new(FailurePolicy::Strict)
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }
}

impl MovementStorage for JsonMovementStorage {
    fn export_json(&self, destination: &Path, movements: &[Movement]) -> Result<()> {
        let outcome = write_movements(destination, movements);
        if outcome.is_ok() {
            tracing::info!(
                "exported {} movement(s) to `{}`",
                movements.len(),
                destination.display()
            );
        }
        self.policy
            .settle("movement export", destination, outcome, || ())
    }

    fn import_json(&self, source: &Path) -> Result<Vec<Movement>> {
        let outcome = read_movements(source);
        if let Ok(movements) = &outcome {
            tracing::info!(
                "imported {} movement(s) from `{}`",
                movements.len(),
                source.display()
            );
        }
        self.policy
            .settle("movement import", source, outcome, Vec::new)
    }
}

/// Serializes `movements` as a pretty-printed JSON array at `path`.
///
/// The write is not staged through a temporary file; a failure part-way may
/// leave a truncated document behind.
pub fn write_movements(path: &Path, movements: &[Movement]) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(movements)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(())
}

/// Loads a JSON array of movements from `path`, returning structured errors on failure.
pub fn read_movements(path: &Path) -> Result<Vec<Movement>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
