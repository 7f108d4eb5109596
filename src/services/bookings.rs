//! Registration of a client for a trip.

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::types::TripId;
use crate::forms::bookings::{AssignClientForm, AssignClientPayload};
use crate::repository::errors::RepositoryError;
use crate::repository::{BookingReader, BookingWriter, ClientReader, TripReader};
use crate::services::clock::Clock;
use crate::services::{ServiceError, ServiceResult};

pub const CLIENT_NOT_FOUND: &str = "Client with provided PESEL does not exist!";
pub const TRIP_NOT_FOUND: &str = "Trip with provided IdTrip does not exist!";
pub const ALREADY_ASSIGNED: &str = "Client is already assigned to this trip";
pub const TRIP_STARTED: &str = "This trip has already started or ended!";

/// Books the client identified by PESEL onto the trip.
///
/// Checks run in a fixed order and stop at the first failure: client, trip,
/// existing booking, trip start, payment date. The booking is stamped with
/// the clock's current time.
pub fn assign_client_to_trip<R, C>(
    repo: &R,
    clock: &C,
    trip_id: i32,
    form: AssignClientForm,
) -> ServiceResult<Booking>
where
    R: ClientReader + TripReader + BookingReader + BookingWriter + ?Sized,
    C: Clock + ?Sized,
{
    let payload = AssignClientPayload::from(form);

    let client = match &payload.pesel {
        Some(pesel) => repo.get_client_by_pesel(pesel)?,
        None => None,
    }
    .ok_or_else(|| ServiceError::NotFound(CLIENT_NOT_FOUND.to_string()))?;

    let trip = match TripId::new(trip_id) {
        Ok(trip_id) => repo.get_trip_by_id(trip_id)?,
        Err(_) => None,
    }
    .ok_or_else(|| ServiceError::NotFound(TRIP_NOT_FOUND.to_string()))?;

    if repo.get_booking(client.id, trip.id)?.is_some() {
        return Err(ServiceError::Conflict(ALREADY_ASSIGNED.to_string()));
    }

    let now = clock.now();
    if !trip.is_open_for_booking(now) {
        return Err(ServiceError::BusinessRule(TRIP_STARTED.to_string()));
    }

    let payment_date = payload.parse_payment_date()?;

    let new_booking = NewBooking {
        client_id: client.id,
        trip_id: trip.id,
        registered_at: now,
        payment_date,
    };

    match repo.create_booking(&new_booking) {
        Ok(booking) => {
            log::info!("Assigned client {} to trip {}", client.id, trip.id);
            Ok(booking)
        }
        // Lost the race against an identical request.
        Err(RepositoryError::UniqueViolation(_)) => {
            Err(ServiceError::Conflict(ALREADY_ASSIGNED.to_string()))
        }
        Err(err) => {
            log::error!(
                "Failed to assign client {} to trip {}: {err}",
                client.id,
                trip.id
            );
            Err(err.into())
        }
    }
}
