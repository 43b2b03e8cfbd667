//! # Service Configuration
//!
//! Everything the process needs at startup, read from environment variables with defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `USER_SERVICE_BIND_ADDR` | `0.0.0.0:9998` |
//! | `USER_SERVICE_STORE` | `sqlite` (or `memory`) |
//! | `USER_SERVICE_DB_PATH` | `users.db` |
//! | `ORDER_SERVICE_URL` | `http://order-microservice:80` |
//! | `ORDER_SERVICE_TIMEOUT_MS` | `5000` |
//! | `USER_ACTOR_BUFFER` | `32` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:9998";
pub const DEFAULT_DB_PATH: &str = "users.db";
pub const DEFAULT_ORDER_SERVICE_URL: &str = "http://order-microservice:80";
pub const DEFAULT_ORDER_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_ACTOR_BUFFER: usize = 32;

/// Where user records are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-local; lost on restart.
    Memory,
    /// SQLite database file at the given path.
    Sqlite(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
    pub order_service_url: String,
    pub order_timeout: Duration,
    pub actor_buffer: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid USER_SERVICE_BIND_ADDR: {0}")]
    InvalidBindAddr(String),
    #[error("invalid USER_SERVICE_STORE: {0} (expected `sqlite` or `memory`)")]
    InvalidStore(String),
    #[error("invalid ORDER_SERVICE_URL: {0}")]
    InvalidOrderServiceUrl(String),
    #[error("invalid ORDER_SERVICE_TIMEOUT_MS: {0}")]
    InvalidOrderTimeout(String),
    #[error("invalid USER_ACTOR_BUFFER: {0}")]
    InvalidActorBuffer(String),
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 9998)),
            store: StoreBackend::Sqlite(PathBuf::from(DEFAULT_DB_PATH)),
            order_service_url: DEFAULT_ORDER_SERVICE_URL.to_string(),
            order_timeout: Duration::from_millis(DEFAULT_ORDER_TIMEOUT_MS),
            actor_buffer: DEFAULT_ACTOR_BUFFER,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_addr = read("USER_SERVICE_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|error| ConfigError::InvalidBindAddr(error.to_string()))?;

        let store = match read("USER_SERVICE_STORE")
            .unwrap_or_else(|| "sqlite".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "memory" => StoreBackend::Memory,
            "sqlite" => StoreBackend::Sqlite(PathBuf::from(
                read("USER_SERVICE_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            )),
            other => return Err(ConfigError::InvalidStore(other.to_string())),
        };

        let order_service_url = read("ORDER_SERVICE_URL")
            .unwrap_or_else(|| DEFAULT_ORDER_SERVICE_URL.to_string());
        if !(order_service_url.starts_with("http://") || order_service_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidOrderServiceUrl(order_service_url));
        }

        let order_timeout_ms = read("ORDER_SERVICE_TIMEOUT_MS")
            .unwrap_or_else(|| DEFAULT_ORDER_TIMEOUT_MS.to_string())
            .parse::<u64>()
            .map_err(|error| ConfigError::InvalidOrderTimeout(error.to_string()))?;
        if order_timeout_ms == 0 {
            return Err(ConfigError::InvalidOrderTimeout(
                "must be greater than zero".to_string(),
            ));
        }

        let actor_buffer = read("USER_ACTOR_BUFFER")
            .unwrap_or_else(|| DEFAULT_ACTOR_BUFFER.to_string())
            .parse::<usize>()
            .map_err(|error| ConfigError::InvalidActorBuffer(error.to_string()))?;
        if actor_buffer == 0 {
            return Err(ConfigError::InvalidActorBuffer(
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            store,
            order_service_url,
            order_timeout: Duration::from_millis(order_timeout_ms),
            actor_buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("USER_SERVICE_BIND_ADDR", "127.0.0.1:8080"),
            ("USER_SERVICE_STORE", "sqlite"),
            ("USER_SERVICE_DB_PATH", "/var/lib/users/users.db"),
            ("ORDER_SERVICE_URL", "https://orders.internal"),
            ("ORDER_SERVICE_TIMEOUT_MS", "750"),
            ("USER_ACTOR_BUFFER", "8"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.store,
            StoreBackend::Sqlite(PathBuf::from("/var/lib/users/users.db"))
        );
        assert_eq!(config.order_service_url, "https://orders.internal");
        assert_eq!(config.order_timeout, Duration::from_millis(750));
        assert_eq!(config.actor_buffer, 8);
    }

    #[test]
    fn test_memory_store_ignores_db_path() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("USER_SERVICE_STORE", "Memory"),
            ("USER_SERVICE_DB_PATH", "ignored.db"),
        ]))
        .unwrap();
        assert_eq!(config.store, StoreBackend::Memory);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            ServiceConfig::from_lookup(lookup_from(&[("ORDER_SERVICE_TIMEOUT_MS", "  ")])).unwrap();
        assert_eq!(config.order_timeout, Duration::from_millis(DEFAULT_ORDER_TIMEOUT_MS));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            ServiceConfig::from_lookup(lookup_from(&[("USER_SERVICE_BIND_ADDR", "nope")])),
            Err(ConfigError::InvalidBindAddr(_))
        ));
        assert_eq!(
            ServiceConfig::from_lookup(lookup_from(&[("USER_SERVICE_STORE", "mongo")])),
            Err(ConfigError::InvalidStore("mongo".to_string()))
        );
        assert!(matches!(
            ServiceConfig::from_lookup(lookup_from(&[("ORDER_SERVICE_URL", "orders:80")])),
            Err(ConfigError::InvalidOrderServiceUrl(_))
        ));
        assert!(matches!(
            ServiceConfig::from_lookup(lookup_from(&[("ORDER_SERVICE_TIMEOUT_MS", "0")])),
            Err(ConfigError::InvalidOrderTimeout(_))
        ));
        assert!(matches!(
            ServiceConfig::from_lookup(lookup_from(&[("USER_ACTOR_BUFFER", "-1")])),
            Err(ConfigError::InvalidActorBuffer(_))
        ));
    }
}
