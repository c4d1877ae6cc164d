//! Extractors for accessing the authenticated principal in handlers.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::error::AuthError;
use crate::http::security::principal::Principal;

/// Extractor for the authenticated principal.
///
/// # Usage
/// ```ignore
/// async fn handler(principal: AuthenticatedPrincipal) -> impl Responder {
///     format!("Hello, {}!", principal.name())
/// }
/// ```
///
/// # Errors
/// Fails the request with `401 Unauthorized` when no principal is present.
#[derive(Debug, Clone)]
pub struct AuthenticatedPrincipal(Principal);

impl AuthenticatedPrincipal {
    /// Returns the inner principal.
    pub fn into_inner(self) -> Principal {
        self.0
    }
}

impl Deref for AuthenticatedPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AuthenticatedPrincipal {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Principal>().cloned() {
            Some(principal) => ready(Ok(AuthenticatedPrincipal(principal))),
            None => ready(Err(AuthError::Unauthorized)),
        }
    }
}

/// Optional extractor for the authenticated principal.
///
/// Yields `None` instead of an error when the request is anonymous.
#[derive(Debug, Clone)]
pub struct OptionalPrincipal(Option<Principal>);

impl OptionalPrincipal {
    /// Returns the inner `Option<Principal>`.
    pub fn into_inner(self) -> Option<Principal> {
        self.0
    }

    /// True when a principal is present.
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl Deref for OptionalPrincipal {
    type Target = Option<Principal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for OptionalPrincipal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(Ok(OptionalPrincipal(principal)))
    }
}
