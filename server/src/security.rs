//! The request-authorization wiring for this backend.

use portcullis_core::http::security::{
    CorsPolicy, CsrfGuard, HttpBasicConfig, HttpSecurity, InMemoryProvider, Requirement,
    RouteRules, SecurityFilterChain, SessionPolicy,
};

/// Requirement applied to paths no explicit rule covers.
///
/// Permissive for now so unlisted routes stay reachable; switch to
/// `Requirement::Authenticated` to protect everything except the listed
/// public routes.
pub const FALLBACK_RULE: Requirement = Requirement::Public;

/// Users accepted by this backend.
fn credentials() -> InMemoryProvider {
    InMemoryProvider::new().with_user("foo", "bar")
}

/// Builds the security filter chain:
///
/// - stateless sessions, every request authenticates itself;
/// - HTTP Basic challenges on protected paths;
/// - `/api/hello` and `/api/user/**` stay public, `/api/secured` requires a
///   principal, everything else follows [`FALLBACK_RULE`];
/// - default CORS so browser clients can preflight without credentials;
/// - CSRF guard off while no cookie-based session exists; it must be
///   re-enabled if cookie sessions are ever introduced.
pub fn security_filter_chain() -> SecurityFilterChain {
    HttpSecurity::new()
        .session_management(SessionPolicy::Stateless)
        .http_basic(HttpBasicConfig::default())
        .authentication_provider(credentials())
        .authorize_requests(
            RouteRules::builder()
                .permit_all("/api/hello")
                .permit_all("/api/user/**")
                .authenticated("/api/secured")
                .any_request(FALLBACK_RULE),
        )
        .cors(CorsPolicy::default())
        .csrf(CsrfGuard::disabled())
        .build()
}
