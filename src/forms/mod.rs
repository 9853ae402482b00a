//! Payload definitions accepted by the rental API.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod vehicle;

#[derive(Debug, Error)]
/// Errors that can occur when processing submitted payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} is invalid: {source}")]
    InvalidField {
        field: &'static str,
        source: TypeConstraintError,
    },
}
