//! REST server configuration.
//!
//! Resolved once at process startup and passed to the server. Request handlers never read
//! environment variables.

use std::net::SocketAddr;

/// Listen address used when `DONATION_REST_ADDR` is unset or blank.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid REST listen address '{value}': {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// REST configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RestConfig {
    addr: SocketAddr,
}

impl RestConfig {
    pub fn new(addr: SocketAddr) -> Self {
        Self { addr }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

/// Parse the REST listen address from an optional environment value.
///
/// `None` or a blank value selects [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> Result<SocketAddr, ConfigError> {
    let value = value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.to_owned());

    value
        .parse()
        .map_err(|source| ConfigError::InvalidAddr { value, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_addr_defaults_when_unset_or_blank() {
        let expected: SocketAddr = DEFAULT_REST_ADDR.parse().unwrap();
        assert_eq!(rest_addr_from_env_value(None).unwrap(), expected);
        assert_eq!(rest_addr_from_env_value(Some("  ".into())).unwrap(), expected);
    }

    #[test]
    fn test_rest_addr_parses_override() {
        let addr = rest_addr_from_env_value(Some("127.0.0.1:8080".into())).unwrap();
        assert_eq!(addr.port(), 8080);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn test_rest_addr_rejects_garbage() {
        let err = rest_addr_from_env_value(Some("localhost".into())).expect_err("needs a port");
        assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "localhost"));
    }
}
