//! HTTP handlers of the booking API.

use actix_web::web;

pub mod clients;
pub mod trips;

/// Registers every API endpoint under `/api`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(trips::list_trips)
            .service(trips::assign_client)
            .service(clients::delete_client),
    );
}
