use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while reading configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub database_name: String,
    pub db_max_connections: u32,
    pub db_bootstrap_schema: bool,
}

impl Config {
    /// Load configuration from `.env` (when present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server_host: text("SERVER_HOST", "127.0.0.1"),
            server_port: parse(&lookup, "SERVER_PORT", "8080", "port number")?,
            db_host: text("DB_HOST", "localhost"),
            db_port: parse(&lookup, "DB_PORT", "3306", "port number")?,
            db_user: text("DB_USER", "root"),
            db_password: text("DB_PASS", ""),
            database_name: text("DATABASE", "usuarios"),
            db_max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", "10", "number")?,
            db_bootstrap_schema: parse(&lookup, "DB_BOOTSTRAP_SCHEMA", "true", "boolean")?,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse<F, T>(
    lookup: &F,
    key: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            expected,
            value,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
        assert_eq!(config.db_host, "localhost");
        assert_eq!(config.db_port, 3306);
        assert_eq!(config.db_password, "");
        assert_eq!(config.db_max_connections, 10);
        assert!(config.db_bootstrap_schema);
    }

    #[test]
    fn test_database_variables_are_read() {
        let config = config_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "app"),
            ("DB_PASS", "s3cret"),
            ("DATABASE", "cadastro"),
            ("DB_BOOTSTRAP_SCHEMA", "false"),
        ])
        .unwrap();
        assert_eq!(config.db_host, "db.internal");
        assert_eq!(config.db_user, "app");
        assert_eq!(config.db_password, "s3cret");
        assert_eq!(config.database_name, "cadastro");
        assert!(!config.db_bootstrap_schema);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("SERVER_PORT", "eighty")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "SERVER_PORT",
                expected: "port number",
                value: "eighty".to_string(),
            }
        );
    }
}
