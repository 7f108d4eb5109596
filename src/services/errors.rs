use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the services. Every variant except
/// [`ServiceError::Repository`] carries a reason meant for the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request would break an invariant of the stored data.
    #[error("{0}")]
    Conflict(String),

    /// Malformed or out-of-range caller input.
    #[error("{0}")]
    InvalidArgument(String),

    /// The request is well-formed but a business rule forbids it.
    #[error("{0}")]
    BusinessRule(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}
