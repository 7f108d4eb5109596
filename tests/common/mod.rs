#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use trip_booking::db::{DbConnection, DbPool, establish_connection_pool};
use trip_booking::models::booking::NewBooking;
use trip_booking::models::client::NewClient;
use trip_booking::models::country::{NewCountry, NewCountryTrip};
use trip_booking::models::trip::NewTrip;
use trip_booking::repository::DieselRepository;
use trip_booking::schema::{client_trips, clients, countries, country_trip, trips};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database living in a temporary directory.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut pooled = pool.get().expect("get connection");
        let conn: &mut SqliteConnection = &mut pooled;
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }

    pub fn conn(&self) -> DbConnection {
        self.pool.get().expect("get connection")
    }

    pub fn insert_trip(&self, name: &str, date_from: NaiveDateTime) -> i32 {
        diesel::insert_into(trips::table)
            .values(&NewTrip {
                name,
                description: "Guided tour",
                date_from,
                date_to: date_from + chrono::Duration::days(7),
                max_people: 20,
            })
            .returning(trips::id)
            .get_result(&mut self.conn())
            .expect("insert trip")
    }

    pub fn insert_client(&self, first_name: &str, last_name: &str, pesel: &str) -> i32 {
        let email = format!("{}@example.com", first_name.to_lowercase());
        diesel::insert_into(clients::table)
            .values(&NewClient {
                first_name,
                last_name,
                email: &email,
                telephone: "600100200",
                pesel,
            })
            .returning(clients::id)
            .get_result(&mut self.conn())
            .expect("insert client")
    }

    pub fn set_client_email(&self, client_id: i32, email: &str) {
        diesel::update(clients::table.find(client_id))
            .set(clients::email.eq(email))
            .execute(&mut self.conn())
            .expect("update client email");
    }

    pub fn insert_country(&self, name: &str) -> i32 {
        diesel::insert_into(countries::table)
            .values(&NewCountry { name })
            .returning(countries::id)
            .get_result(&mut self.conn())
            .expect("insert country")
    }

    pub fn link_country(&self, country_id: i32, trip_id: i32) {
        diesel::insert_into(country_trip::table)
            .values(&NewCountryTrip {
                country_id,
                trip_id,
            })
            .execute(&mut self.conn())
            .expect("link country");
    }

    pub fn book(&self, client_id: i32, trip_id: i32, registered_at: NaiveDateTime) {
        diesel::insert_into(client_trips::table)
            .values(&NewBooking {
                client_id,
                trip_id,
                registered_at,
                payment_date: None,
            })
            .execute(&mut self.conn())
            .expect("insert booking");
    }

    pub fn booking_count(&self) -> i64 {
        client_trips::table
            .count()
            .get_result(&mut self.conn())
            .expect("count bookings")
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}
