use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::{
    config::Config,
    domain::Movement,
    report::MovementPdfGenerator,
    storage::{JsonMovementStorage, MovementStorage},
};

use super::{ServiceError, ServiceResult};

pub const EXPORT_FILE_NAME: &str = "movements.json";
const BATCH_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Drives movement exports and reports into the configured directories.
pub struct MovementReportService {
    storage: Box<dyn MovementStorage>,
    reports: MovementPdfGenerator,
    export_dir: PathBuf,
    report_dir: PathBuf,
}

impl MovementReportService {
    pub fn new(
        storage: Box<dyn MovementStorage>,
        reports: MovementPdfGenerator,
        export_dir: PathBuf,
        report_dir: PathBuf,
    ) -> Self {
        Self {
            storage,
            reports,
            export_dir,
            report_dir,
        }
    }

    /// Builds a JSON/PDF service honoring the configured directories and failure policy.
    pub fn from_config(config: &Config, base: &Path) -> Self {
        Self::new(
            Box::new(JsonMovementStorage::new(config.failure_policy)),
            MovementPdfGenerator::new(config.failure_policy),
            config.resolve_export_dir(base),
            config.resolve_report_dir(base),
        )
    }

    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(EXPORT_FILE_NAME)
    }

    pub fn movement_report_path(&self, movement: &Movement) -> PathBuf {
        self.report_dir
            .join(format!("movement_{}.pdf", file_safe(&movement.id)))
    }

    pub fn batch_report_path(&self, generated_at: NaiveDateTime) -> PathBuf {
        self.report_dir.join(format!(
            "movements_{}.pdf",
            generated_at.format(BATCH_TIMESTAMP_FORMAT)
        ))
    }

    /// Exports `movements` to the default export file and returns its path.
    pub fn export(&self, movements: &[Movement]) -> ServiceResult<PathBuf> {
        let path = self.export_path();
        self.storage.export_json(&path, movements)?;
        Ok(path)
    }

    /// Reads back the default export file.
    pub fn import(&self) -> ServiceResult<Vec<Movement>> {
        self.import_from(&self.export_path())
    }

    pub fn import_from(&self, source: &Path) -> ServiceResult<Vec<Movement>> {
        Ok(self.storage.import_json(source)?)
    }

    pub fn report_movement(&self, movement: &Movement) -> ServiceResult<PathBuf> {
        let path = self.movement_report_path(movement);
        self.reports.generate_movement_pdf(&path, movement)?;
        Ok(path)
    }

    pub fn report_movements(&self, movements: &[Movement]) -> ServiceResult<PathBuf> {
        let path = self.batch_report_path(Local::now().naive_local());
        self.reports.generate_movements_pdf(&path, movements)?;
        Ok(path)
    }

    /// Looks up a movement by id within `movements`.
    pub fn find<'a>(movements: &'a [Movement], id: &str) -> ServiceResult<&'a Movement> {
        movements
            .iter()
            .find(|movement| movement.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.to_string()))
    }
}

fn file_safe(id: &str) -> String {
    let sanitized: String = id
        .trim()
        .chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "movement".into()
    } else {
        sanitized
    }
}
