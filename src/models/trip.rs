use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::trip::Trip as DomainTrip;
use crate::domain::types::{TripId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::trips)]
/// Diesel model for [`crate::domain::trip::Trip`].
pub struct Trip {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::trips)]
/// Insertable form of [`Trip`].
pub struct NewTrip<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

impl TryFrom<Trip> for DomainTrip {
    type Error = TypeConstraintError;

    fn try_from(trip: Trip) -> Result<Self, Self::Error> {
        Ok(Self {
            id: TripId::try_from(trip.id)?,
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
        })
    }
}
