//! Database models shared across the booking repository.

pub mod booking;
pub mod client;
pub mod config;
pub mod country;
pub mod trip;
