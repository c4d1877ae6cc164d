//! Cross-site request forgery guard.
//!
//! The guard is stateless: there is no session to hold a token, so when it
//! is enabled it verifies that state-changing requests carry an `Origin`
//! (or `Referer`) whose host matches the request host. Configurations
//! without cookie-based sessions disable the guard; it must come back if
//! cookie sessions are ever introduced.

use actix_web::http::Method;

/// Toggleable same-origin check for unsafe methods.
#[derive(Debug, Clone)]
pub struct CsrfGuard {
    enabled: bool,
}

impl CsrfGuard {
    pub fn enabled() -> Self {
        CsrfGuard { enabled: true }
    }

    pub fn disabled() -> Self {
        CsrfGuard { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True when the request may proceed.
    ///
    /// Safe methods always pass, as do requests carrying neither `Origin`
    /// nor `Referer` (non-browser clients send no origin information).
    pub fn permits(
        &self,
        method: &Method,
        origin: Option<&str>,
        referer: Option<&str>,
        host: &str,
    ) -> bool {
        if !self.enabled || is_safe(method) {
            return true;
        }
        match origin.or(referer) {
            Some(source) => same_host(source, host),
            None => true,
        }
    }
}

impl Default for CsrfGuard {
    fn default() -> Self {
        Self::enabled()
    }
}

fn is_safe(method: &Method) -> bool {
    *method == Method::GET
        || *method == Method::HEAD
        || *method == Method::OPTIONS
        || *method == Method::TRACE
}

/// Compares the host[:port] part of an origin or referer URL against `host`.
fn same_host(url: &str, host: &str) -> bool {
    let rest = match url.split_once("://") {
        Some((_, rest)) => rest,
        None => return false,
    };
    let url_host = rest.split('/').next().unwrap_or(rest);
    url_host == host
}
