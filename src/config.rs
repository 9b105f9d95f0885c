//! Server configuration from environment variables
//!
//! HOST (default 0.0.0.0), PORT (default 8000), RUST_LOG for the tracing filter.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8000;

/// Default log level: info for our crate, debug for request tracing, warn for others
pub const DEFAULT_LOG_FILTER: &str = "bias_lab_api=info,tower_http=debug,axum=debug,warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid HOST {:?}, using {}", raw, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        Self { host, port }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
