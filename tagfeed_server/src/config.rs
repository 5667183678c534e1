//! Command line and environment configuration.

use std::time::Duration;

use actix_cors::Cors;
use clap::Parser;
use tagfeed_lib::medium_api;
use tagfeed_lib::ProxyConfig;

#[derive(Parser, Clone)]
#[command(name = "tagfeed-proxy")]
#[command(about = "Proxy Medium tag feeds as a flat JSON list of articles")]
pub struct Cli {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Medium API key, sent as a bearer token
    #[arg(long, env = "MEDIUM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// GraphQL endpoint to forward to
    #[arg(long, env = "MEDIUM_GRAPHQL_ENDPOINT", default_value = medium_api::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Upstream timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 25)]
    pub timeout_secs: u64,

    /// Comma separated list of allowed origins, `*` for any
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", default_value = "*")]
    pub cors_allowed_origins: String,

    /// Number of HTTP workers (defaults to the number of CPUs)
    #[arg(long, env = "WORKERS")]
    pub workers: Option<usize>,
}

impl std::fmt::Debug for Cli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cli")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("workers", &self.workers)
            .finish()
    }
}

impl Cli {
    pub fn proxy_config(&self) -> ProxyConfig {
        ProxyConfig {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

/// CORS policy from a comma separated origin list. `*` allows any origin.
pub fn build_cors(allowed_origins: &str) -> Cors {
    let mut cors = Cors::default();
    for origin in allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
    {
        if origin == "*" {
            cors = cors.allow_any_origin().send_wildcard();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tagfeed-proxy"]).unwrap();
        assert_eq!(cli.timeout_secs, 25);
        assert_eq!(cli.cors_allowed_origins, "*");

        let config = cli.proxy_config();
        assert_eq!(config.endpoint, medium_api::DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(25));
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "tagfeed-proxy",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--api-key",
            "secret",
            "--endpoint",
            "http://localhost:1234/graphql",
            "--timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.bind_address(), ("127.0.0.1".to_string(), 9090));
        let config = cli.proxy_config();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, "http://localhost:1234/graphql");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(!format!("{:?}", cli).contains("secret"));
    }
}
