//! Server configuration.

use std::net::SocketAddr;

use tracing::warn;

/// Environment variable holding the listen address.
pub const BIND_ADDR_VAR: &str = "BOOKING_BIND_ADDR";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable values are logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => warn!(
                    value = %raw,
                    error = %e,
                    "Invalid {BIND_ADDR_VAR}, using {}",
                    config.bind_addr
                ),
            }
        }

        config
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_bind_addr() {
        let config = ServerConfig::from_lookup(|key| {
            (key == BIND_ADDR_VAR).then(|| "0.0.0.0:8080".to_string())
        });
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn invalid_bind_addr_falls_back() {
        let config = ServerConfig::from_lookup(|_| Some("not an address".to_string()));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn missing_values_use_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
    }
}
