use std::time::Duration;

/// Default Colormind endpoint
const DEFAULT_UPSTREAM_URL: &str = "http://colormind.io/api/";

/// Single trusted browser origin allowed through the CORS gate
const DEFAULT_ALLOWED_ORIGIN: &str = "https://harmonyc.netlify.app";

/// Application configuration, resolved once at startup and passed
/// explicitly into the server rather than read ad hoc from the
/// environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Upstream random-palette generator endpoint
    pub upstream_url: String,

    /// The one cross-origin browser origin we accept
    pub allowed_origin: String,

    /// Per-attempt timeout on upstream fetches
    pub fetch_timeout: Duration,
}

impl AppConfig {
    /// Resolve configuration from environment variables.
    ///
    /// `BIND_ADDR` wins over `PORT`; `PORT` alone binds all interfaces
    /// for parity with the original deployment.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| bind_addr_from_port(std::env::var("PORT").ok().as_deref()));

        let upstream_url =
            std::env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let allowed_origin =
            std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        let fetch_timeout = std::env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(default_fetch_timeout);

        Self {
            bind_addr,
            upstream_url,
            allowed_origin,
            fetch_timeout,
        }
    }
}

fn bind_addr_from_port(port: Option<&str>) -> String {
    match port {
        Some(port) if !port.is_empty() => format!("0.0.0.0:{port}"),
        _ => "0.0.0.0:5000".to_string(),
    }
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: bind_addr_from_port(None),
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            fetch_timeout: default_fetch_timeout(),
        }
    }
}
