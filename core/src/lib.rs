//! Declarative request authorization for actix-web backends.
//!
//! The crate wraps an application in a single security middleware, the
//! [`SecurityFilterChain`](http::security::SecurityFilterChain), assembled
//! through the [`HttpSecurity`](http::security::HttpSecurity) builder:
//!
//! ```ignore
//! use portcullis_core::http::security::{
//!     CorsPolicy, CsrfGuard, HttpBasicConfig, HttpSecurity, InMemoryProvider,
//!     Requirement, RouteRules, SessionPolicy,
//! };
//!
//! let chain = HttpSecurity::new()
//!     .session_management(SessionPolicy::Stateless)
//!     .http_basic(HttpBasicConfig::default())
//!     .authentication_provider(InMemoryProvider::new().with_user("foo", "bar"))
//!     .authorize_requests(
//!         RouteRules::builder()
//!             .permit_all("/api/hello")
//!             .authenticated("/api/secured")
//!             .any_request(Requirement::Public),
//!     )
//!     .cors(CorsPolicy::default())
//!     .csrf(CsrfGuard::disabled())
//!     .build();
//!
//! App::new().wrap(chain)
//! ```
//!
//! Every request is decided independently from its own `Authorization`
//! header; no session state exists anywhere in the crate.

pub mod http;
