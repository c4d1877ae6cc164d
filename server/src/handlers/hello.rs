use actix_web::{get, HttpResponse, Responder};

use portcullis_core::http::security::OptionalPrincipal;

/// Public greeting; personalized when the caller happens to be
/// authenticated.
#[get("/api/hello")]
pub async fn hello(principal: OptionalPrincipal) -> impl Responder {
    let body = match principal.into_inner() {
        Some(principal) => format!("Hello, {}!", principal.name()),
        None => "Hello from the backend!".to_string(),
    };
    HttpResponse::Ok().body(body)
}
