//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::booking::{Booking, NewBooking};
use crate::domain::client::Client;
use crate::domain::trip::{Trip, TripDetails};
use crate::domain::types::{ClientId, Pesel, TripId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    BookingReader, BookingWriter, ClientReader, ClientWriter, TripListQuery, TripReader,
};

mock! {
    pub Repository {}

    impl TripReader for Repository {
        fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<TripDetails>)>;
        fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>>;
    }

    impl ClientReader for Repository {
        fn get_client_by_pesel(&self, pesel: &Pesel) -> RepositoryResult<Option<Client>>;
        fn get_client_with_bookings(
            &self,
            id: ClientId,
        ) -> RepositoryResult<Option<(Client, Vec<Booking>)>>;
    }

    impl ClientWriter for Repository {
        fn delete_client(&self, id: ClientId) -> RepositoryResult<()>;
    }

    impl BookingReader for Repository {
        fn get_booking(
            &self,
            client_id: ClientId,
            trip_id: TripId,
        ) -> RepositoryResult<Option<Booking>>;
    }

    impl BookingWriter for Repository {
        fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<Booking>;
    }
}
