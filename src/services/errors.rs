use thiserror::Error;

use crate::pagination::PaginationError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the listing and creation services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input is malformed; the message is safe to show.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidPagination(PaginationError),

    /// Reserved for single-record operations.
    #[error("not found")]
    NotFound,

    /// The record store failed; details must not reach the caller.
    #[error("store error: {0}")]
    Store(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Store(other),
        }
    }
}
