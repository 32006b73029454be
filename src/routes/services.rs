use crate::domain::ServiceOffering;
use actix_web::{HttpResponse, Responder};

/// The closed list the contact form's service dropdown is populated from.
pub async fn offered_services() -> impl Responder {
    let names: Vec<&str> = ServiceOffering::ALL.iter().map(|s| s.name()).collect();
    HttpResponse::Ok().json(names)
}
