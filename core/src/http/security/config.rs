//! Security configuration.

use std::sync::Arc;

use crate::http::security::basic::HttpBasicConfig;
use crate::http::security::cors::CorsPolicy;
use crate::http::security::csrf::CsrfGuard;
use crate::http::security::middleware::SecurityFilterChain;
use crate::http::security::provider::AuthenticationProvider;
use crate::http::security::rules::RouteRules;
use crate::http::security::session::SessionPolicy;

/// Declarative builder for a [`SecurityFilterChain`].
///
/// # Example
/// ```ignore
/// let chain = HttpSecurity::new()
///     .session_management(SessionPolicy::Stateless)
///     .http_basic(HttpBasicConfig::default())
///     .authentication_provider(InMemoryProvider::new().with_user("foo", "bar"))
///     .authorize_requests(
///         RouteRules::builder()
///             .permit_all("/api/hello")
///             .authenticated("/api/secured")
///             .any_request(Requirement::Public),
///     )
///     .cors(CorsPolicy::default())
///     .csrf(CsrfGuard::disabled())
///     .build();
///
/// App::new().wrap(chain)
/// ```
pub struct HttpSecurity {
    session_policy: SessionPolicy,
    http_basic: HttpBasicConfig,
    provider: Option<Arc<dyn AuthenticationProvider>>,
    rules: Option<RouteRules>,
    cors: Option<CorsPolicy>,
    csrf: CsrfGuard,
}

impl HttpSecurity {
    pub fn new() -> Self {
        HttpSecurity {
            session_policy: SessionPolicy::Stateless,
            http_basic: HttpBasicConfig::default(),
            provider: None,
            rules: None,
            cors: None,
            csrf: CsrfGuard::default(),
        }
    }

    /// Records the session policy. Stateless is the only policy there is;
    /// the call documents the choice at the wiring site.
    pub fn session_management(mut self, policy: SessionPolicy) -> Self {
        self.session_policy = policy;
        self
    }

    /// Configures the HTTP Basic challenge.
    pub fn http_basic(mut self, config: HttpBasicConfig) -> Self {
        self.http_basic = config;
        self
    }

    /// Installs the credential validator. Without one every request stays
    /// anonymous.
    pub fn authentication_provider<P>(mut self, provider: P) -> Self
    where
        P: AuthenticationProvider + 'static,
    {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Installs the route rules. Unset rules permit every request.
    pub fn authorize_requests(mut self, rules: RouteRules) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Enables cross-origin handling with the given policy.
    pub fn cors(mut self, policy: CorsPolicy) -> Self {
        self.cors = Some(policy);
        self
    }

    /// Replaces the CSRF guard. Enabled by default; disable it only while no
    /// cookie-based session exists.
    pub fn csrf(mut self, guard: CsrfGuard) -> Self {
        self.csrf = guard;
        self
    }

    /// Freezes the configuration into a wrappable filter chain.
    pub fn build(self) -> SecurityFilterChain {
        SecurityFilterChain::new(SecurityConfig {
            session_policy: self.session_policy,
            http_basic: self.http_basic,
            provider: self.provider,
            rules: self.rules.unwrap_or_else(RouteRules::permit_all),
            cors: self.cors,
            csrf: self.csrf,
        })
    }
}

impl Default for HttpSecurity {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen configuration shared by the chain's per-worker services.
pub struct SecurityConfig {
    pub(crate) session_policy: SessionPolicy,
    pub(crate) http_basic: HttpBasicConfig,
    pub(crate) provider: Option<Arc<dyn AuthenticationProvider>>,
    pub(crate) rules: RouteRules,
    pub(crate) cors: Option<CorsPolicy>,
    pub(crate) csrf: CsrfGuard,
}

impl SecurityConfig {
    pub fn session_policy(&self) -> SessionPolicy {
        self.session_policy
    }
}
