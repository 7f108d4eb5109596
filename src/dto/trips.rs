//! Response payload of the trip listing.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::trip::TripDetails;

/// One page of trips.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripsPage {
    pub page_num: usize,
    pub page_size: usize,
    /// `ceil(total / page_size)`, zero when there are no trips.
    pub all_pages: usize,
    pub trips: Vec<TripSummary>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
    pub countries: Vec<CountrySummary>,
    pub clients: Vec<ParticipantSummary>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CountrySummary {
    pub name: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSummary {
    pub first_name: String,
    pub last_name: String,
}

impl From<TripDetails> for TripSummary {
    fn from(details: TripDetails) -> Self {
        let TripDetails {
            trip,
            countries,
            participants,
        } = details;

        Self {
            name: trip.name,
            description: trip.description,
            date_from: trip.date_from,
            date_to: trip.date_to,
            max_people: trip.max_people,
            countries: countries
                .into_iter()
                .map(|country| CountrySummary {
                    name: country.name,
                })
                .collect(),
            clients: participants
                .into_iter()
                .map(|client| ParticipantSummary {
                    first_name: client.first_name,
                    last_name: client.last_name,
                })
                .collect(),
        }
    }
}
