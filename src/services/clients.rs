//! Client removal guarded by the no-bookings rule.

use crate::domain::types::ClientId;
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult};

pub const CLIENT_NOT_FOUND: &str = "Client not found";
pub const CLIENT_HAS_TRIPS: &str = "Client has trips assigned";

/// Deletes the client unless it still has bookings. Never cascades.
pub fn delete_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    let not_found = || ServiceError::NotFound(CLIENT_NOT_FOUND.to_string());

    // No client can own a non-positive id.
    let client_id = ClientId::new(client_id).map_err(|_| not_found())?;

    let (client, bookings) = repo
        .get_client_with_bookings(client_id)?
        .ok_or_else(not_found)?;

    if !bookings.is_empty() {
        log::warn!(
            "Refusing to delete client {}: {} booking(s) present",
            client.id,
            bookings.len()
        );
        return Err(ServiceError::Conflict(CLIENT_HAS_TRIPS.to_string()));
    }

    match repo.delete_client(client.id) {
        Ok(()) => {
            log::info!("Deleted client {}", client.id);
            Ok(())
        }
        Err(RepositoryError::NotFound) => Err(not_found()),
        // A booking was committed after the check above.
        Err(RepositoryError::ConstraintViolation(reason)) => {
            log::warn!("Refusing to delete client {}: {reason}", client.id);
            Err(ServiceError::Conflict(CLIENT_HAS_TRIPS.to_string()))
        }
        Err(err) => {
            log::error!("Failed to delete client {}: {err}", client.id);
            Err(err.into())
        }
    }
}
