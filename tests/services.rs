use trip_booking::domain::types::{ClientId, TripId};
use trip_booking::forms::bookings::AssignClientForm;
use trip_booking::forms::trips::TripsQueryForm;
use trip_booking::repository::{BookingReader, ClientReader};
use trip_booking::services::ServiceError;
use trip_booking::services::bookings::{
    ALREADY_ASSIGNED, TRIP_STARTED, assign_client_to_trip,
};
use trip_booking::services::clients::{CLIENT_HAS_TRIPS, delete_client};
use trip_booking::services::clock::FixedClock;
use trip_booking::services::trips::list_trips;

mod common;

use common::date;

const PESEL: &str = "12345678901";

fn assign_form(payment_date: &str) -> AssignClientForm {
    AssignClientForm {
        first_name: Some("Jan".to_string()),
        last_name: Some("Kowalski".to_string()),
        email: Some("jan@example.com".to_string()),
        telephone: Some("600100200".to_string()),
        pesel: Some(PESEL.to_string()),
        trip_name: Some("Winter".to_string()),
        payment_date: Some(payment_date.to_string()),
    }
}

#[test]
fn test_assigns_client_to_future_trip() {
    let test_db = common::TestDb::new("test_assigns_client_to_future_trip.db");
    let repo = test_db.repo();
    let clock = FixedClock(date(2025, 6, 1));

    let trip = test_db.insert_trip("Winter", date(2030, 1, 1));
    let client = test_db.insert_client("Jan", "Kowalski", PESEL);

    let booking = assign_client_to_trip(&repo, &clock, trip, assign_form("")).unwrap();
    assert_eq!(booking.client_id.get(), client);
    assert_eq!(booking.trip_id.get(), trip);
    assert_eq!(booking.registered_at, date(2025, 6, 1));
    assert_eq!(booking.payment_date, None);

    let stored = repo
        .get_booking(ClientId::new(client).unwrap(), TripId::new(trip).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(stored, booking);
}

#[test]
fn test_second_assignment_is_rejected() {
    let test_db = common::TestDb::new("test_second_assignment_is_rejected.db");
    let repo = test_db.repo();
    let clock = FixedClock(date(2025, 6, 1));

    let trip = test_db.insert_trip("Winter", date(2030, 1, 1));
    test_db.insert_client("Jan", "Kowalski", PESEL);

    assign_client_to_trip(&repo, &clock, trip, assign_form("2025-05-30")).unwrap();
    let second = assign_client_to_trip(&repo, &clock, trip, assign_form(""));

    assert!(matches!(second, Err(ServiceError::Conflict(reason)) if reason == ALREADY_ASSIGNED));
    assert_eq!(test_db.booking_count(), 1);
}

#[test]
fn test_started_trip_is_not_bookable() {
    let test_db = common::TestDb::new("test_started_trip_is_not_bookable.db");
    let repo = test_db.repo();
    let clock = FixedClock(date(2025, 6, 1));

    let trip = test_db.insert_trip("Spring", date(2025, 3, 1));
    test_db.insert_client("Jan", "Kowalski", PESEL);

    let result = assign_client_to_trip(&repo, &clock, trip, assign_form(""));

    assert!(matches!(result, Err(ServiceError::BusinessRule(reason)) if reason == TRIP_STARTED));
    assert_eq!(test_db.booking_count(), 0);
}

#[test]
fn test_delete_client_respects_bookings() {
    let test_db = common::TestDb::new("test_delete_client_respects_bookings.db");
    let repo = test_db.repo();

    let trip = test_db.insert_trip("Winter", date(2030, 1, 1));
    let booked = test_db.insert_client("Jan", "Kowalski", PESEL);
    let free = test_db.insert_client("Anna", "Nowak", "90010112345");
    test_db.book(booked, trip, date(2025, 1, 1));

    let refused = delete_client(&repo, booked);
    assert!(matches!(refused, Err(ServiceError::Conflict(reason)) if reason == CLIENT_HAS_TRIPS));
    assert!(
        repo.get_client_with_bookings(ClientId::new(booked).unwrap())
            .unwrap()
            .is_some()
    );
    assert_eq!(test_db.booking_count(), 1);

    delete_client(&repo, free).unwrap();
    assert!(
        repo.get_client_with_bookings(ClientId::new(free).unwrap())
            .unwrap()
            .is_none()
    );
    assert!(matches!(
        delete_client(&repo, free),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn test_empty_listing() {
    let test_db = common::TestDb::new("test_empty_listing.db");
    let repo = test_db.repo();

    let page = list_trips(&repo, TripsQueryForm::default()).unwrap();

    assert_eq!(page.page_num, 1);
    assert_eq!(page.page_size, 10);
    assert_eq!(page.all_pages, 0);
    assert!(page.trips.is_empty());
}

#[test]
fn test_listing_window_matches_page_math() {
    let test_db = common::TestDb::new("test_listing_window_matches_page_math.db");
    let repo = test_db.repo();

    let total: usize = 7;
    for day in 1..=total as u32 {
        test_db.insert_trip(&format!("Trip {day}"), date(2030, 1, day));
    }

    for page_size in 1..=8usize {
        for page in 1..=5usize {
            let form = TripsQueryForm {
                page: Some(page as i64),
                page_size: Some(page_size as i64),
            };
            let result = list_trips(&repo, form).unwrap();

            let expected_len = page_size.min(total.saturating_sub((page - 1) * page_size));
            assert_eq!(result.trips.len(), expected_len, "page {page} size {page_size}");
            assert_eq!(result.all_pages, total.div_ceil(page_size));
            assert!(
                result
                    .trips
                    .windows(2)
                    .all(|pair| pair[0].date_from >= pair[1].date_from)
            );
        }
    }
}

#[test]
fn test_clients_with_free_form_contact_data_are_served() {
    let test_db = common::TestDb::new("test_clients_with_free_form_contact_data_are_served.db");
    let repo = test_db.repo();
    let clock = FixedClock(date(2025, 6, 1));

    let trip = test_db.insert_trip("Winter", date(2030, 1, 1));
    let listed = test_db.insert_client("Anna", "Nowak", "90010112345");
    let assigned = test_db.insert_client("Jan", "Kowalski", PESEL);
    let removed = test_db.insert_client("Ola", "Nordmann", "80020254321");
    test_db.set_client_email(listed, "");
    test_db.set_client_email(assigned, "jan at example");
    test_db.set_client_email(removed, "not-an-email");
    test_db.book(listed, trip, date(2025, 1, 1));

    let page = list_trips(&repo, TripsQueryForm::default()).unwrap();
    assert_eq!(page.trips.len(), 1);
    assert_eq!(page.trips[0].clients[0].first_name, "Anna");

    let booking = assign_client_to_trip(&repo, &clock, trip, assign_form("")).unwrap();
    assert_eq!(booking.client_id.get(), assigned);

    delete_client(&repo, removed).unwrap();
    assert!(
        repo.get_client_with_bookings(ClientId::new(removed).unwrap())
            .unwrap()
            .is_none()
    );
}
