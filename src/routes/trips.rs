use actix_web::{Either, HttpResponse, Responder, get, post, web};

use crate::forms::bookings::AssignClientForm;
use crate::forms::trips::TripsQueryForm;
use crate::repository::DieselRepository;
use crate::services::clock::SystemClock;
use crate::services::{ServiceError, bookings as bookings_service, trips as trips_service};

#[get("/trips")]
pub async fn list_trips(
    repo: web::Data<DieselRepository>,
    query: web::Query<TripsQueryForm>,
) -> impl Responder {
    match trips_service::list_trips(repo.get_ref(), query.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(ServiceError::InvalidArgument(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to list trips: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Accepts the fields either as a JSON body or in the query string.
#[post("/trips/{trip_id}/clients")]
pub async fn assign_client(
    trip_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: Either<web::Json<AssignClientForm>, web::Query<AssignClientForm>>,
) -> impl Responder {
    let form = match form {
        Either::Left(json) => json.into_inner(),
        Either::Right(query) => query.into_inner(),
    };

    match bookings_service::assign_client_to_trip(
        repo.get_ref(),
        &SystemClock,
        trip_id.into_inner(),
        form,
    ) {
        Ok(_) => HttpResponse::Ok().body("Assigned client to the trip successfully"),
        Err(ServiceError::Repository(err)) => {
            log::error!("Failed to assign client to the trip: {err}");
            HttpResponse::InternalServerError().finish()
        }
        Err(err) => HttpResponse::BadRequest().body(err.to_string()),
    }
}
