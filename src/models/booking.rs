//! Diesel models for client trip bookings.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::booking::{Booking as DomainBooking, NewBooking as DomainNewBooking};
use crate::domain::types::{ClientId, TripId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(primary_key(client_id, trip_id))]
#[diesel(table_name = crate::schema::client_trips)]
/// Diesel model for [`crate::domain::booking::Booking`].
pub struct Booking {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::client_trips)]
/// Insertable form of [`Booking`].
pub struct NewBooking {
    pub client_id: i32,
    pub trip_id: i32,
    pub registered_at: NaiveDateTime,
    pub payment_date: Option<NaiveDateTime>,
}

impl TryFrom<Booking> for DomainBooking {
    type Error = TypeConstraintError;

    fn try_from(booking: Booking) -> Result<Self, Self::Error> {
        Ok(Self {
            client_id: ClientId::try_from(booking.client_id)?,
            trip_id: TripId::try_from(booking.trip_id)?,
            registered_at: booking.registered_at,
            payment_date: booking.payment_date,
        })
    }
}

impl From<&DomainNewBooking> for NewBooking {
    fn from(booking: &DomainNewBooking) -> Self {
        Self {
            client_id: booking.client_id.get(),
            trip_id: booking.trip_id.get(),
            registered_at: booking.registered_at,
            payment_date: booking.payment_date,
        }
    }
}
