//! Request authentication and authorization.
//!
//! # Module Structure
//!
//! - `basic` - HTTP Basic credential parsing and challenge configuration
//! - `config` - The `HttpSecurity` builder and frozen `SecurityConfig`
//! - `cors` - Cross-origin policy and preflight handling
//! - `csrf` - Stateless cross-site request forgery guard
//! - `extractor` - Handler extractors (`AuthenticatedPrincipal`, `OptionalPrincipal`)
//! - `middleware` - The `SecurityFilterChain` middleware
//! - `path_matcher` - Ant-style path patterns
//! - `principal` - The authenticated identity
//! - `provider` - Credential validation (`AuthenticationProvider`, `InMemoryProvider`)
//! - `rules` - Ordered route rules, first match wins
//! - `session` - Session policy (stateless)

// Re-exports for convenience
pub use basic::HttpBasicConfig;
pub use config::{HttpSecurity, SecurityConfig};
pub use cors::{AllowedHeaders, AllowedOrigins, CorsPolicy};
pub use csrf::CsrfGuard;
pub use extractor::{AuthenticatedPrincipal, OptionalPrincipal};
pub use middleware::SecurityFilterChain;
pub use path_matcher::PathPattern;
pub use principal::Principal;
pub use provider::{AuthenticationProvider, InMemoryProvider};
pub use rules::{AccessDecision, Requirement, RouteRules, RouteRulesBuilder};
pub use session::SessionPolicy;

pub mod basic;
pub mod config;
pub mod cors;
pub mod csrf;
pub mod extractor;
pub mod middleware;
pub mod path_matcher;
pub mod principal;
pub mod provider;
pub mod rules;
pub mod session;
