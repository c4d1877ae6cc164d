//! HTTP Basic Authentication support (RFC 7617).
//!
//! Parses the `Authorization: Basic <base64(username:password)>` header and
//! builds the `WWW-Authenticate` challenge. Credential validation itself
//! lives behind [`AuthenticationProvider`](super::provider::AuthenticationProvider).

use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use base64::prelude::*;

/// Extracts the credential pair from the `Authorization` header.
///
/// Any malformed header (wrong scheme, invalid base64, non-UTF-8 payload,
/// missing `:` separator) yields `None` and the request stays anonymous.
pub fn parse_basic_credentials(req: &ServiceRequest) -> Option<(String, String)> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64_STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

/// HTTP Basic challenge configuration.
#[derive(Debug, Clone)]
pub struct HttpBasicConfig {
    realm: String,
}

impl HttpBasicConfig {
    /// Creates a configuration with the default realm "Restricted".
    pub fn new() -> Self {
        HttpBasicConfig {
            realm: "Restricted".to_string(),
        }
    }

    /// Sets the realm name advertised in the challenge.
    pub fn realm(mut self, realm: &str) -> Self {
        self.realm = realm.to_string();
        self
    }

    /// The `WWW-Authenticate` header value.
    pub fn www_authenticate_header(&self) -> String {
        format!("Basic realm=\"{}\"", self.realm)
    }
}

impl Default for HttpBasicConfig {
    fn default() -> Self {
        Self::new()
    }
}
