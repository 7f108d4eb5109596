use actix_web::{HttpResponse, Responder, delete, web};

use crate::repository::DieselRepository;
use crate::services::{ServiceError, clients as clients_service};

#[delete("/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match clients_service::delete_client(repo.get_ref(), client_id.into_inner()) {
        Ok(()) => HttpResponse::Ok().body("Client deleted successfully"),
        Err(ServiceError::NotFound(message)) => HttpResponse::NotFound().body(message),
        Err(ServiceError::Conflict(message)) => HttpResponse::BadRequest().body(message),
        Err(err) => {
            log::error!("Failed to delete client: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
