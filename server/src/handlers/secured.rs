use actix_web::{get, HttpResponse, Responder};

use portcullis_core::http::security::AuthenticatedPrincipal;

/// Only reachable with valid credentials; the filter chain answers 401
/// before this handler otherwise.
#[get("/api/secured")]
pub async fn secured(principal: AuthenticatedPrincipal) -> impl Responder {
    HttpResponse::Ok().body(format!("You are authenticated as {}.", principal.name()))
}
