use diesel::prelude::*;

use crate::{
    domain::{
        booking::{Booking, NewBooking},
        types::{ClientId, TripId},
    },
    models::booking::{Booking as DbBooking, NewBooking as DbNewBooking},
    repository::{BookingReader, BookingWriter, DieselRepository, errors::RepositoryResult},
};

impl BookingReader for DieselRepository {
    fn get_booking(
        &self,
        client_id: ClientId,
        trip_id: TripId,
    ) -> RepositoryResult<Option<Booking>> {
        use crate::schema::client_trips;

        let mut conn = self.conn()?;
        let db_booking = client_trips::table
            .find((client_id.get(), trip_id.get()))
            .first::<DbBooking>(&mut conn)
            .optional()?;

        match db_booking {
            Some(db_booking) => Ok(Some(Booking::try_from(db_booking)?)),
            None => Ok(None),
        }
    }
}

impl BookingWriter for DieselRepository {
    fn create_booking(&self, booking: &NewBooking) -> RepositoryResult<Booking> {
        use crate::schema::client_trips;

        let mut conn = self.conn()?;
        let db_new_booking: DbNewBooking = booking.into();

        let db_booking = diesel::insert_into(client_trips::table)
            .values(&db_new_booking)
            .get_result::<DbBooking>(&mut conn)?;

        Ok(Booking::try_from(db_booking)?)
    }
}
