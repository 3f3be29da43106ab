//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BIND_ADDR {value:?} is not a socket address")]
    InvalidBindAddr { value: String },

    #[error("{var} must be `true` or `false`, got {value:?}")]
    InvalidBool { var: &'static str, value: String },

    #[error("DATABASE_URL must be set when USE_PERSISTENT_STORES=true")]
    MissingDatabaseUrl,
}

/// Which backend serves blog records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    InMemory { seed_path: Option<PathBuf> },
    Postgres { database_url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreBackend,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr: SocketAddr = match var("BIND_ADDR") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr {
                    value: DEFAULT_BIND_ADDR.to_string(),
                })?,
        };

        let use_persistent = match var("USE_PERSISTENT_STORES") {
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidBool {
                    var: "USE_PERSISTENT_STORES",
                    value,
                })?,
            None => false,
        };

        let store = if use_persistent {
            StoreBackend::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
            }
        } else {
            StoreBackend::InMemory {
                seed_path: var("BLOG_SEED_PATH").map(PathBuf::from),
            }
        };

        Ok(Self { bind_addr, store })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_to_in_memory_on_port_8080() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(cfg.store, StoreBackend::InMemory { seed_path: None });
    }

    #[test]
    fn reads_seed_path_and_bind_addr() {
        let cfg = config(&[("BIND_ADDR", "127.0.0.1:3000"), ("BLOG_SEED_PATH", "/srv/blogs.json")])
            .unwrap();
        assert_eq!(cfg.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            cfg.store,
            StoreBackend::InMemory {
                seed_path: Some(PathBuf::from("/srv/blogs.json"))
            }
        );
    }

    #[test]
    fn persistent_store_requires_database_url() {
        assert_eq!(
            config(&[("USE_PERSISTENT_STORES", "true")]),
            Err(ConfigError::MissingDatabaseUrl)
        );

        let cfg = config(&[
            ("USE_PERSISTENT_STORES", "true"),
            ("DATABASE_URL", "postgres://localhost/blogs"),
        ])
        .unwrap();
        assert_eq!(
            cfg.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/blogs".to_string()
            }
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(matches!(
            config(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            config(&[("USE_PERSISTENT_STORES", "yes")]),
            Err(ConfigError::InvalidBool { .. })
        ));
    }

    #[test]
    fn empty_values_count_as_unset() {
        let cfg = config(&[("BIND_ADDR", ""), ("BLOG_SEED_PATH", "  ")]).unwrap();
        assert_eq!(cfg.store, StoreBackend::InMemory { seed_path: None });
    }
}
