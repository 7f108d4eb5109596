use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, TripId};

/// Reservation of a trip by a client. At most one exists per pair.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: NaiveDateTime,
    /// Set once the payment for the trip has been recorded.
    pub payment_date: Option<NaiveDateTime>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewBooking {
    pub client_id: ClientId,
    pub trip_id: TripId,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}
