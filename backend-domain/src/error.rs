// Store error taxonomy shared by every repository port

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("write rejected by store: {0}")]
    WriteFailure(String),
    #[error("store not configured: {0}")]
    Configuration(String),
    #[error(transparent)]
    Read(#[from] anyhow::Error),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        StoreError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
