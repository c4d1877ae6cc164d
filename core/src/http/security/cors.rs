//! Cross-origin resource sharing.
//!
//! The policy runs ahead of authentication inside the filter chain, so
//! browser preflight requests succeed without credentials. The default
//! policy is permissive: any origin, the simple methods, echoed request
//! headers, and a 30 minute preflight cache.
//!
//! # Example
//! ```rust
//! use actix_web::http::Method;
//! use portcullis_core::http::security::cors::CorsPolicy;
//!
//! let policy = CorsPolicy::new()
//!     .allow_origin("https://app.example.com")
//!     .allowed_methods(vec![Method::GET, Method::POST, Method::DELETE])
//!     .max_age(3600);
//! assert!(policy.origin_allowed("https://app.example.com"));
//! assert!(!policy.origin_allowed("https://evil.example.com"));
//! ```

use actix_web::http::header::{self, HeaderMap, HeaderValue};
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse};

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone)]
pub enum AllowedOrigins {
    /// Any origin; responses carry `Access-Control-Allow-Origin: *`.
    Any,
    /// An explicit allow-list; allowed origins are echoed back.
    List(Vec<String>),
}

/// Headers a preflight may approve.
#[derive(Debug, Clone)]
pub enum AllowedHeaders {
    /// Echo whatever the preflight asked for.
    AnyRequested,
    /// A fixed list.
    List(Vec<String>),
}

/// Cross-origin policy: origins, methods, headers and preflight cache
/// lifetime. Supplied by the application; the chain only applies it.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    allowed_origins: AllowedOrigins,
    allowed_methods: Vec<Method>,
    allowed_headers: AllowedHeaders,
    max_age: Option<usize>,
}

impl Default for CorsPolicy {
    /// Permissive defaults: any origin, `GET`/`HEAD`/`POST`, echoed request
    /// headers, 1800 second preflight cache.
    fn default() -> Self {
        CorsPolicy {
            allowed_origins: AllowedOrigins::Any,
            allowed_methods: vec![Method::GET, Method::HEAD, Method::POST],
            allowed_headers: AllowedHeaders::AnyRequested,
            max_age: Some(1800),
        }
    }
}

impl CorsPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts origins to an allow-list; the first call replaces the
    /// default `Any`, further calls extend the list.
    pub fn allow_origin(mut self, origin: &str) -> Self {
        match &mut self.allowed_origins {
            AllowedOrigins::List(list) => list.push(origin.to_string()),
            any => *any = AllowedOrigins::List(vec![origin.to_string()]),
        }
        self
    }

    /// Replaces the allowed method list.
    pub fn allowed_methods(mut self, methods: Vec<Method>) -> Self {
        self.allowed_methods = methods;
        self
    }

    /// Replaces the allowed header list.
    pub fn allowed_headers(mut self, headers: Vec<&str>) -> Self {
        self.allowed_headers = AllowedHeaders::List(headers.iter().map(|h| h.to_string()).collect());
        self
    }

    /// Sets the preflight cache lifetime in seconds.
    pub fn max_age(mut self, seconds: usize) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn origin_allowed(&self, origin: &str) -> bool {
        match &self.allowed_origins {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(list) => list.iter().any(|allowed| allowed == origin),
        }
    }

    pub fn method_allowed(&self, method: &Method) -> bool {
        self.allowed_methods.contains(method)
    }

    /// True when `req` is a CORS preflight: `OPTIONS` carrying both `Origin`
    /// and `Access-Control-Request-Method`.
    pub fn is_preflight(req: &HttpRequest) -> bool {
        req.method() == Method::OPTIONS
            && req.headers().contains_key(header::ORIGIN)
            && req
                .headers()
                .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    /// Answers a preflight. 403 when the origin or the requested method is
    /// not allowed; 204 with the `Access-Control-Allow-*` headers otherwise.
    pub fn preflight_response(&self, req: &HttpRequest) -> HttpResponse {
        let origin = req
            .headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        let requested_method = req
            .headers()
            .get(header::ACCESS_CONTROL_REQUEST_METHOD)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Method>().ok());

        let method_allowed = requested_method
            .as_ref()
            .is_some_and(|method| self.method_allowed(method));
        if !self.origin_allowed(origin) || !method_allowed {
            log::warn!(
                "preflight from {:?} for {:?} rejected",
                origin,
                requested_method
            );
            return HttpResponse::Forbidden().finish();
        }

        let mut builder = HttpResponse::NoContent();
        match &self.allowed_origins {
            AllowedOrigins::Any => {
                builder.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));
            }
            AllowedOrigins::List(_) => {
                builder.insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin));
                builder.insert_header((header::VARY, "Origin"));
            }
        }
        let methods = self
            .allowed_methods
            .iter()
            .map(Method::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        builder.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, methods));
        match &self.allowed_headers {
            AllowedHeaders::AnyRequested => {
                if let Some(requested) = req
                    .headers()
                    .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
                    .and_then(|value| value.to_str().ok())
                {
                    builder.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, requested));
                }
            }
            AllowedHeaders::List(list) => {
                builder.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, list.join(", ")));
            }
        }
        if let Some(age) = self.max_age {
            builder.insert_header((header::ACCESS_CONTROL_MAX_AGE, age.to_string()));
        }
        builder.finish()
    }

    /// Adds cross-origin response headers for a request from `origin`.
    /// Applied to every response, short-circuits included, so browsers can
    /// read challenge statuses too.
    pub fn decorate(&self, origin: &str, headers: &mut HeaderMap) {
        match &self.allowed_origins {
            AllowedOrigins::Any => {
                headers.insert(
                    header::ACCESS_CONTROL_ALLOW_ORIGIN,
                    HeaderValue::from_static("*"),
                );
            }
            AllowedOrigins::List(_) if self.origin_allowed(origin) => {
                if let Ok(value) = HeaderValue::from_str(origin) {
                    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
                    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
                }
            }
            AllowedOrigins::List(_) => {}
        }
    }
}
