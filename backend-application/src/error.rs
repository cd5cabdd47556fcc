use backend_domain::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("write failed: {0}")]
    WriteFailure(String),
    #[error("store not configured: {0}")]
    Configuration(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { entity, id } => {
                AppError::NotFound(format!("{} {} not found", entity, id))
            }
            StoreError::WriteFailure(msg) => AppError::WriteFailure(msg),
            StoreError::Configuration(msg) => AppError::Configuration(msg),
            StoreError::Read(err) => AppError::Internal(err),
        }
    }
}
