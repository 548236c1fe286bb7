use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_DB_NAME: &str = "soccer";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:1323";

/// Errors raised while reading startup configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set, please provide one")]
    MissingVar(&'static str),

    #[error("{var} has an invalid value {value:?}: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MongoDB connection string (`MONGODB_URI`, required)
    pub mongodb_uri: String,
    /// Database name (`MONGODB_DBNAME`, default `soccer`)
    pub mongodb_db_name: String,
    /// Listen address (`BIND_ADDR`, default `0.0.0.0:1323`)
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVar("MONGODB_URI"))?;

        let mongodb_db_name = lookup("MONGODB_DBNAME")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidVar {
                var: "BIND_ADDR",
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            mongodb_uri,
            mongodb_db_name,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn uri_is_required() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("MONGODB_URI"));
    }

    #[test]
    fn empty_uri_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("MONGODB_URI", "")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingVar("MONGODB_URI"));
    }

    #[test]
    fn defaults_apply() {
        let config =
            Config::from_lookup(lookup(&[("MONGODB_URI", "mongodb://localhost:27017")])).unwrap();

        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongodb_db_name, "soccer");
        assert_eq!(config.bind_addr, "0.0.0.0:1323".parse().unwrap());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db:27017"),
            ("MONGODB_DBNAME", "league"),
            ("BIND_ADDR", "127.0.0.1:8080"),
        ]))
        .unwrap();

        assert_eq!(config.mongodb_db_name, "league");
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn bad_bind_addr_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db:27017"),
            ("BIND_ADDR", "not-an-address"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidVar { var: "BIND_ADDR", .. }));
    }
}
