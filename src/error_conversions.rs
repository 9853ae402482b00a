//! Error conversion glue between the domain layer and the layers above it.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here.

use crate::domain::filter::FilterError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::pagination::PaginationError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<FilterError> for ServiceError {
    fn from(val: FilterError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<PaginationError> for ServiceError {
    fn from(val: PaginationError) -> Self {
        ServiceError::InvalidPagination(val)
    }
}
