//! Business services behind the booking API.

pub mod bookings;
pub mod clients;
pub mod clock;
pub mod errors;
pub mod trips;

pub use errors::{ServiceError, ServiceResult};
