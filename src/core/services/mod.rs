pub mod movement_report_service;

pub use movement_report_service::MovementReportService;

use crate::errors::MovementError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Movement(#[from] MovementError),
    #[error("Movement not found: {0}")]
    NotFound(String),
}
