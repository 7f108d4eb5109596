//! Domain aggregates exposed by the booking service layer.

pub mod booking;
pub mod client;
pub mod country;
pub mod trip;
pub mod types;
