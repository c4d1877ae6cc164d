//! Ordered route rules.
//!
//! Authorization is an explicit, ordered list of (pattern, requirement)
//! pairs, evaluated top to bottom. The first pattern that matches the request
//! path decides; a mandatory catch-all terminates the list. The catch-all is
//! supplied through [`RouteRulesBuilder::any_request`], the builder's
//! consuming terminal call, so it always sits last.
//!
//! # Examples
//!
//! ```rust
//! use portcullis_core::http::security::rules::{AccessDecision, Requirement, RouteRules};
//!
//! let rules = RouteRules::builder()
//!     .permit_all("/api/hello")
//!     .authenticated("/api/secured")
//!     .any_request(Requirement::Public);
//!
//! assert_eq!(rules.decide("/api/hello", false), AccessDecision::Allow);
//! assert_eq!(rules.decide("/api/secured", false), AccessDecision::Challenge);
//! assert_eq!(rules.decide("/api/secured", true), AccessDecision::Allow);
//! ```

use crate::http::security::path_matcher::PathPattern;

/// What a matched route demands from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// No principal needed.
    Public,
    /// An authenticated principal must be present.
    Authenticated,
}

/// Outcome of evaluating the rules for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Forward to the handler.
    Allow,
    /// Demand credentials: 401 with a `WWW-Authenticate` challenge.
    Challenge,
    /// Refuse outright: 403.
    Deny,
}

#[derive(Debug, Clone)]
struct RouteRule {
    pattern: PathPattern,
    requirement: Requirement,
}

/// Ordered (pattern, requirement) list with a mandatory catch-all.
#[derive(Debug, Clone)]
pub struct RouteRules {
    rules: Vec<RouteRule>,
    fallback: Requirement,
}

impl RouteRules {
    pub fn builder() -> RouteRulesBuilder {
        RouteRulesBuilder { rules: Vec::new() }
    }

    /// Rules that let every request through.
    pub fn permit_all() -> Self {
        Self::builder().any_request(Requirement::Public)
    }

    /// Evaluates the rules for `path`. Exactly one rule applies: the first
    /// match, or the catch-all when nothing matches.
    pub fn decide(&self, path: &str, authenticated: bool) -> AccessDecision {
        let requirement = self
            .rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.requirement)
            .unwrap_or(self.fallback);

        match requirement {
            Requirement::Public => AccessDecision::Allow,
            Requirement::Authenticated if authenticated => AccessDecision::Allow,
            Requirement::Authenticated => AccessDecision::Challenge,
        }
    }

    /// The pattern text that decides `path`; `None` means the catch-all.
    pub fn matched_pattern(&self, path: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.pattern.matches(path))
            .map(|rule| rule.pattern.pattern())
    }
}

/// Builder for [`RouteRules`].
#[derive(Debug)]
pub struct RouteRulesBuilder {
    rules: Vec<RouteRule>,
}

impl RouteRulesBuilder {
    /// Appends a rule allowing unauthenticated access to `pattern`.
    pub fn permit_all(self, pattern: &str) -> Self {
        self.matcher(pattern, Requirement::Public)
    }

    /// Appends a rule requiring an authenticated principal for `pattern`.
    pub fn authenticated(self, pattern: &str) -> Self {
        self.matcher(pattern, Requirement::Authenticated)
    }

    /// Appends a rule with an explicit requirement.
    pub fn matcher(mut self, pattern: &str, requirement: Requirement) -> Self {
        self.rules.push(RouteRule {
            pattern: PathPattern::new(pattern),
            requirement,
        });
        self
    }

    /// Terminates the list with the catch-all requirement.
    pub fn any_request(self, fallback: Requirement) -> RouteRules {
        RouteRules {
            rules: self.rules,
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rules(fallback: Requirement) -> RouteRules {
        RouteRules::builder()
            .permit_all("/api/hello")
            .permit_all("/api/user/**")
            .authenticated("/api/secured")
            .any_request(fallback)
    }

    #[test]
    fn public_route_allows_anonymous() {
        let rules = sample_rules(Requirement::Public);
        assert_eq!(rules.decide("/api/hello", false), AccessDecision::Allow);
        assert_eq!(rules.decide("/api/user/17", false), AccessDecision::Allow);
    }

    #[test]
    fn protected_route_challenges_anonymous() {
        let rules = sample_rules(Requirement::Public);
        assert_eq!(rules.decide("/api/secured", false), AccessDecision::Challenge);
    }

    #[test]
    fn protected_route_allows_principal() {
        let rules = sample_rules(Requirement::Public);
        assert_eq!(rules.decide("/api/secured", true), AccessDecision::Allow);
    }

    #[test]
    fn permissive_fallback() {
        let rules = sample_rules(Requirement::Public);
        assert_eq!(rules.decide("/metrics", false), AccessDecision::Allow);
    }

    #[test]
    fn strict_fallback() {
        let rules = sample_rules(Requirement::Authenticated);
        assert_eq!(rules.decide("/metrics", false), AccessDecision::Challenge);
        assert_eq!(rules.decide("/metrics", true), AccessDecision::Allow);
        // Listed public routes are unaffected.
        assert_eq!(rules.decide("/api/hello", false), AccessDecision::Allow);
    }

    #[test]
    fn first_match_wins() {
        let rules = RouteRules::builder()
            .authenticated("/api/**")
            .permit_all("/api/hello")
            .any_request(Requirement::Public);
        // The broad rule sits first and shadows the narrower one.
        assert_eq!(rules.decide("/api/hello", false), AccessDecision::Challenge);

        let rules = RouteRules::builder()
            .permit_all("/api/hello")
            .authenticated("/api/**")
            .any_request(Requirement::Public);
        assert_eq!(rules.decide("/api/hello", false), AccessDecision::Allow);
    }

    #[test]
    fn matched_pattern_reports_rule() {
        let rules = sample_rules(Requirement::Public);
        assert_eq!(rules.matched_pattern("/api/user/17"), Some("/api/user/**"));
        assert_eq!(rules.matched_pattern("/metrics"), None);
    }

    #[test]
    fn permit_all_lets_everything_through() {
        let rules = RouteRules::permit_all();
        assert_eq!(rules.decide("/anything", false), AccessDecision::Allow);
    }
}
