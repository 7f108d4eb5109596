use diesel::prelude::*;

use crate::{
    domain::{
        booking::Booking,
        client::Client,
        types::{ClientId, Pesel},
    },
    models::{booking::Booking as DbBooking, client::Client as DbClient},
    repository::{
        ClientReader, ClientWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ClientReader for DieselRepository {
    fn get_client_by_pesel(&self, pesel: &Pesel) -> RepositoryResult<Option<Client>> {
        use crate::schema::clients;

        let mut conn = self.conn()?;
        let db_client = clients::table
            .filter(clients::pesel.eq(pesel.as_str()))
            .first::<DbClient>(&mut conn)
            .optional()?;

        match db_client {
            Some(db_client) => Ok(Some(Client::try_from(db_client)?)),
            None => Ok(None),
        }
    }

    fn get_client_with_bookings(
        &self,
        id: ClientId,
    ) -> RepositoryResult<Option<(Client, Vec<Booking>)>> {
        use crate::schema::{client_trips, clients};

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let Some(db_client) = clients::table
                .find(id.get())
                .first::<DbClient>(conn)
                .optional()?
            else {
                return Ok(None);
            };

            let bookings = client_trips::table
                .filter(client_trips::client_id.eq(id.get()))
                .order(client_trips::registered_at.asc())
                .load::<DbBooking>(conn)?
                .into_iter()
                .map(Booking::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Some((Client::try_from(db_client)?, bookings)))
        })
    }
}

impl ClientWriter for DieselRepository {
    fn delete_client(&self, id: ClientId) -> RepositoryResult<()> {
        use crate::schema::{client_trips, clients};

        let mut conn = self.conn()?;

        // The write lock is taken up front so no booking can slip in between
        // the check and the delete.
        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let bookings = client_trips::table
                .filter(client_trips::client_id.eq(id.get()))
                .count()
                .get_result::<i64>(conn)?;

            if bookings > 0 {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "client {id} has {bookings} booking(s)"
                )));
            }

            let deleted = diesel::delete(clients::table.find(id.get())).execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
