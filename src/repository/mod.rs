use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        booking::{Booking, NewBooking},
        client::Client,
        trip::{Trip, TripDetails},
        types::{ClientId, Pesel, TripId},
    },
    repository::errors::RepositoryResult,
};

pub mod booking;
pub mod client;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod trip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Number of rows preceding the requested page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Trips are always returned by start date, latest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripListQuery {
    pub pagination: Option<Pagination>,
}

impl TripListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait TripReader {
    /// Returns the total number of trips and the requested window, most
    /// recent start date first.
    fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<TripDetails>)>;
    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>>;
}

pub trait ClientReader {
    fn get_client_by_pesel(&self, pesel: &Pesel) -> RepositoryResult<Option<Client>>;
    fn get_client_with_bookings(
        &self,
        id: ClientId,
    ) -> RepositoryResult<Option<(Client, Vec<Booking>)>>;
}

pub trait ClientWriter {
    /// Removes the client unless a booking references it.
    ///
    /// Fails with [`errors::RepositoryError::NotFound`] when the client does
    /// not exist and with [`errors::RepositoryError::ConstraintViolation`]
    /// when bookings are present at the moment of deletion.
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
}

pub trait BookingReader {
    fn get_booking(&self, client_id: ClientId, trip_id: TripId)
    -> RepositoryResult<Option<Booking>>;
}

pub trait BookingWriter {
    /// Inserts the booking. A second booking for the same pair fails with
    /// [`errors::RepositoryError::UniqueViolation`].
    fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<Booking>;
}
