//! Repository implementation for trips and their nested listings.

use std::collections::HashMap;

use diesel::prelude::*;

use crate::{
    domain::{
        client::Client,
        country::Country,
        trip::{Trip, TripDetails},
        types::TripId,
    },
    models::{client::Client as DbClient, country::Country as DbCountry, trip::Trip as DbTrip},
    repository::{
        DieselRepository, TripListQuery, TripReader,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl TripReader for DieselRepository {
    fn list_trips(&self, query: TripListQuery) -> RepositoryResult<(usize, Vec<TripDetails>)> {
        use crate::schema::{client_trips, clients, countries, country_trip, trips};

        let mut conn = self.conn()?;

        // Count and page are read from the same snapshot.
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let total = trips::table.count().get_result::<i64>(conn)? as usize;

            let mut items = trips::table
                .order((trips::date_from.desc(), trips::id.asc()))
                .into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(pagination) = &query.pagination {
                let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
                let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
                items = items.offset(offset).limit(limit);
            }

            let db_trips = items.load::<DbTrip>(conn)?;

            if db_trips.is_empty() {
                return Ok((total, Vec::new()));
            }

            let trip_ids: Vec<i32> = db_trips.iter().map(|trip| trip.id).collect();

            let trip_countries = countries::table
                .inner_join(country_trip::table)
                .filter(country_trip::trip_id.eq_any(&trip_ids))
                .order((countries::name.asc(), countries::id.asc()))
                .select((country_trip::trip_id, countries::all_columns))
                .load::<(i32, DbCountry)>(conn)?;

            let trip_clients = clients::table
                .inner_join(client_trips::table)
                .filter(client_trips::trip_id.eq_any(&trip_ids))
                .order((client_trips::registered_at.asc(), clients::id.asc()))
                .select((client_trips::trip_id, clients::all_columns))
                .load::<(i32, DbClient)>(conn)?;

            let mut countries_by_trip: HashMap<i32, Vec<Country>> = HashMap::new();
            for (trip_id, country) in trip_countries {
                countries_by_trip
                    .entry(trip_id)
                    .or_default()
                    .push(Country::try_from(country)?);
            }

            let mut clients_by_trip: HashMap<i32, Vec<Client>> = HashMap::new();
            for (trip_id, client) in trip_clients {
                clients_by_trip
                    .entry(trip_id)
                    .or_default()
                    .push(Client::try_from(client)?);
            }

            let details = db_trips
                .into_iter()
                .map(|db_trip| {
                    let countries = countries_by_trip.remove(&db_trip.id).unwrap_or_default();
                    let participants = clients_by_trip.remove(&db_trip.id).unwrap_or_default();
                    Ok(TripDetails {
                        trip: Trip::try_from(db_trip)?,
                        countries,
                        participants,
                    })
                })
                .collect::<RepositoryResult<Vec<_>>>()?;

            Ok((total, details))
        })
    }

    fn get_trip_by_id(&self, id: TripId) -> RepositoryResult<Option<Trip>> {
        use crate::schema::trips;

        let mut conn = self.conn()?;
        let db_trip = trips::table
            .find(id.get())
            .first::<DbTrip>(&mut conn)
            .optional()?;

        match db_trip {
            Some(db_trip) => Ok(Some(Trip::try_from(db_trip)?)),
            None => Ok(None),
        }
    }
}
