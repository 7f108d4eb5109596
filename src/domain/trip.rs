use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::country::Country;
use crate::domain::types::TripId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    pub description: String,
    pub date_from: NaiveDateTime,
    pub date_to: NaiveDateTime,
    pub max_people: i32,
}

impl Trip {
    /// A trip accepts new bookings only while its start lies strictly ahead of `now`.
    pub fn is_open_for_booking(&self, now: NaiveDateTime) -> bool {
        self.date_from > now
    }
}

/// Trip together with the countries it visits and the clients booked on it.
#[derive(Clone, Debug, PartialEq)]
pub struct TripDetails {
    pub trip: Trip,
    pub countries: Vec<Country>,
    pub participants: Vec<Client>,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn trip_starting(date_from: NaiveDateTime) -> Trip {
        Trip {
            id: TripId::new(1).unwrap(),
            name: "Alps".to_string(),
            description: String::new(),
            date_from,
            date_to: date_from,
            max_people: 10,
        }
    }

    #[test]
    fn booking_window_closes_at_start() {
        let start = NaiveDate::from_ymd_opt(2030, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let trip = trip_starting(start);

        assert!(trip.is_open_for_booking(start - chrono::Duration::seconds(1)));
        assert!(!trip.is_open_for_booking(start));
        assert!(!trip.is_open_for_booking(start + chrono::Duration::days(1)));
    }
}
