use std::env;
use std::fmt;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Connection parameters for the HR database.
#[derive(Clone, PartialEq)]
pub struct DbConfig {
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &"********")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let db = DbConfig {
            dbname: required("HR_DB_NAME")?,
            user: required("HR_DB_USER")?,
            password: required("HR_DB_PASSWORD")?,
            host: lookup("HR_DB_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, "HR_DB_PORT", DEFAULT_PORT)?,
            max_connections: parse_or(&lookup, "HR_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "HR_DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?),
        };

        Ok(AppConfig {
            db,
            bind_addr: lookup("HR_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_to_optional_settings() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HR_DB_NAME", "hr"),
            ("HR_DB_USER", "hr_app"),
            ("HR_DB_PASSWORD", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.max_connections, 5);
        assert_eq!(config.db.acquire_timeout, Duration::from_secs(5));
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn missing_credentials_are_reported() {
        let err = AppConfig::from_lookup(lookup(&[("HR_DB_NAME", "hr"), ("HR_DB_USER", "hr_app")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("HR_DB_PASSWORD"));
        assert_eq!(err.to_string(), "HR_DB_PASSWORD must be set");
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("HR_DB_NAME", "hr"),
            ("HR_DB_USER", "hr_app"),
            ("HR_DB_PASSWORD", "secret"),
            ("HR_DB_PORT", "postgres"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "HR_DB_PORT",
                value: "postgres".into()
            }
        );
    }

    #[test]
    fn debug_output_hides_password() {
        let config = AppConfig::from_lookup(lookup(&[
            ("HR_DB_NAME", "hr"),
            ("HR_DB_USER", "hr_app"),
            ("HR_DB_PASSWORD", "hunter2"),
        ]))
        .unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("hr_app"));
    }
}
