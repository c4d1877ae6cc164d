//! The security filter chain.
//!
//! One middleware, four interceptors, evaluated in order. Each interceptor
//! either passes the request on or short-circuits with a response:
//!
//! 1. `cors` answers (or rejects) preflight requests before anything else;
//! 2. `csrf` runs the same-origin check when the guard is enabled;
//! 3. `basic_auth` parses credentials, asks the provider, and stores the
//!    [`Principal`] in request extensions; absent or invalid credentials
//!    leave the request anonymous rather than failing it;
//! 4. `authorize` evaluates the route rules and turns `Challenge` into a
//!    401 with a `WWW-Authenticate` header and `Deny` into a 403.
//!
//! Responses from every path, short-circuits included, receive the
//! cross-origin headers when the request carried an `Origin`.

use std::rc::Rc;
use std::sync::Arc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::http::security::basic::parse_basic_credentials;
use crate::http::security::config::SecurityConfig;
use crate::http::security::cors::CorsPolicy;
use crate::http::security::principal::Principal;
use crate::http::security::rules::AccessDecision;

/// Outcome of one interceptor.
enum FilterDecision {
    /// Hand the request to the next interceptor, or the handler.
    Pass,
    /// Stop here and send this response.
    Halt(HttpResponse),
}

type Filter = fn(&SecurityConfig, &ServiceRequest) -> FilterDecision;

/// Interceptors in evaluation order.
const FILTERS: &[(&str, Filter)] = &[
    ("cors", cors_filter),
    ("csrf", csrf_filter),
    ("basic_auth", basic_auth_filter),
    ("authorize", authorize_filter),
];

fn cors_filter(config: &SecurityConfig, req: &ServiceRequest) -> FilterDecision {
    match &config.cors {
        Some(policy) if CorsPolicy::is_preflight(req.request()) => {
            FilterDecision::Halt(policy.preflight_response(req.request()))
        }
        _ => FilterDecision::Pass,
    }
}

fn csrf_filter(config: &SecurityConfig, req: &ServiceRequest) -> FilterDecision {
    let origin = header_str(req, header::ORIGIN);
    let referer = header_str(req, header::REFERER);
    let host = req.request().connection_info().host().to_string();

    if config
        .csrf
        .permits(req.method(), origin.as_deref(), referer.as_deref(), &host)
    {
        FilterDecision::Pass
    } else {
        log::warn!("{} {} blocked by the csrf guard", req.method(), req.path());
        FilterDecision::Halt(HttpResponse::Forbidden().finish())
    }
}

fn basic_auth_filter(config: &SecurityConfig, req: &ServiceRequest) -> FilterDecision {
    let provider = match &config.provider {
        Some(provider) => provider,
        None => return FilterDecision::Pass,
    };
    if let Some((username, password)) = parse_basic_credentials(req) {
        if let Some(principal) = provider.authenticate(&username, &password) {
            req.extensions_mut().insert(principal);
        }
    }
    FilterDecision::Pass
}

fn authorize_filter(config: &SecurityConfig, req: &ServiceRequest) -> FilterDecision {
    let authenticated = req.extensions().get::<Principal>().is_some();
    let decision = config.rules.decide(req.path(), authenticated);
    log::debug!(
        "{} {} -> {:?} (rule {:?})",
        req.method(),
        req.path(),
        decision,
        config.rules.matched_pattern(req.path())
    );
    match decision {
        AccessDecision::Allow => FilterDecision::Pass,
        AccessDecision::Challenge => FilterDecision::Halt(
            HttpResponse::Unauthorized()
                .insert_header((
                    header::WWW_AUTHENTICATE,
                    config.http_basic.www_authenticate_header(),
                ))
                .finish(),
        ),
        AccessDecision::Deny => FilterDecision::Halt(HttpResponse::Forbidden().finish()),
    }
}

fn header_str(req: &ServiceRequest, name: header::HeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Middleware factory produced by
/// [`HttpSecurity::build`](super::config::HttpSecurity::build).
pub struct SecurityFilterChain {
    config: Arc<SecurityConfig>,
}

impl SecurityFilterChain {
    pub(crate) fn new(config: SecurityConfig) -> Self {
        SecurityFilterChain {
            config: Arc::new(config),
        }
    }

    /// The frozen configuration backing this chain.
    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }
}

impl Clone for SecurityFilterChain {
    fn clone(&self) -> Self {
        SecurityFilterChain {
            config: Arc::clone(&self.config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityFilterChain
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SecurityService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SecurityService {
            config: Arc::clone(&self.config),
            service: Rc::new(service),
        })
    }
}

/// Per-worker service running the interceptor list.
pub struct SecurityService<S> {
    config: Arc<SecurityConfig>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for SecurityService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let config = Arc::clone(&self.config);
        let service = Rc::clone(&self.service);
        let origin = req
            .headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        for &(name, filter) in FILTERS {
            if let FilterDecision::Halt(mut response) = filter(&config, &req) {
                log::debug!("{} {} answered by the {} filter", req.method(), req.path(), name);
                if let (Some(policy), Some(origin)) = (&config.cors, origin.as_deref()) {
                    policy.decorate(origin, response.headers_mut());
                }
                return Box::pin(async move {
                    Ok(req.into_response(response.map_into_right_body()))
                });
            }
        }

        let fut = service.call(req);
        Box::pin(async move {
            let mut res = fut.await?.map_into_left_body();
            if let (Some(policy), Some(origin)) = (&config.cors, origin.as_deref()) {
                policy.decorate(origin, res.headers_mut());
            }
            Ok(res)
        })
    }
}
