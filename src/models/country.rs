//! Diesel models for countries and their trip associations.

use diesel::prelude::*;

use crate::domain::country::Country as DomainCountry;
use crate::domain::types::{CountryId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::countries)]
/// Diesel model for [`crate::domain::country::Country`].
pub struct Country {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::countries)]
/// Insertable form of [`Country`].
pub struct NewCountry<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::country_trip)]
/// Links a country to a trip.
pub struct NewCountryTrip {
    pub country_id: i32,
    pub trip_id: i32,
}

impl TryFrom<Country> for DomainCountry {
    type Error = TypeConstraintError;

    fn try_from(country: Country) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CountryId::try_from(country.id)?,
            name: country.name,
        })
    }
}
