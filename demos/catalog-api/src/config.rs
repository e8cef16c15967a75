use std::time::Duration;

use optcg_catalog::ImageMode;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `6090`).
    pub port: u16,
    /// Upstream optcgapi root (default: `https://www.optcgapi.com`).
    pub upstream_base_url: String,
    /// Timeout for upstream and image requests.
    pub upstream_timeout: Duration,
    /// Default strategy for `/image-proxy` when the request does not pick one.
    pub image_mode: ImageMode,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `6090`                     |
    /// | `OPTCG_API_BASE_URL`    | `https://www.optcgapi.com` |
    /// | `UPSTREAM_TIMEOUT_SECS` | `30`                       |
    /// | `IMAGE_MODE`            | `proxy`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "6090".into())
            .parse()
            .expect("PORT must be a valid u16");

        let upstream_base_url = std::env::var("OPTCG_API_BASE_URL")
            .unwrap_or_else(|_| optcg_catalog::config::API_BASE_URL.into());

        let upstream_timeout_secs: u64 = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("UPSTREAM_TIMEOUT_SECS must be a valid u64");

        let image_mode: ImageMode = std::env::var("IMAGE_MODE")
            .unwrap_or_else(|_| "proxy".into())
            .parse()
            .expect("IMAGE_MODE must be 'proxy' or 'relay'");

        Self {
            host,
            port,
            upstream_base_url,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            image_mode,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
