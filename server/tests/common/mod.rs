//! Common test utilities.
//!
//! Builds the application exactly as the binary wires it: the production
//! security filter chain around the production routes.

use actix_web::body::{BoxBody, EitherBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, App, Error};
use base64::prelude::*;

use portcullis_server::security::security_filter_chain;
use portcullis_server::configure_app;

/// Creates a fully configured test application.
pub async fn create_test_app(
) -> impl Service<actix_http::Request, Response = ServiceResponse<EitherBody<BoxBody>>, Error = Error>
{
    test::init_service(
        App::new()
            .wrap(security_filter_chain())
            .configure(configure_app),
    )
    .await
}

/// Builds a Basic Auth header value.
pub fn basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    format!("Basic {}", BASE64_STANDARD.encode(credentials))
}
