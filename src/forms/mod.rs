//! Raw request inputs and the validated payloads derived from them.

use thiserror::Error;
use validator::ValidationErrors;

pub mod bookings;
pub mod trips;

#[derive(Debug, Error)]
/// Errors that can occur when processing request data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid payment date: {0}")]
    InvalidPaymentDate(String),
}
