use thiserror::Error;
use tracing::error;

use backend_domain::RecordId;

use crate::Metrics;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidIdentifier(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub(crate) fn parse_record_id(raw: &str, label: &str) -> Result<RecordId, AppError> {
    RecordId::parse(raw).map_err(|_| AppError::InvalidIdentifier(format!("Invalid {} ID format", label)))
}

pub(crate) fn store_failure(metrics: &Metrics, action: &str, err: anyhow::Error) -> AppError {
    error!("failed to {}: {:#}", action, err);
    metrics.record_store_error();
    AppError::Internal(err)
}
