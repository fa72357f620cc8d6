use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("{0}")]
    Constraint(String),
}

/// Reads one variable through `lookup`, falling back to `default` when absent.
pub fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw.clone(),
        }),
    }
}

pub fn parse_flag<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordHasherKind {
    Argon2,
    Bcrypt,
}

impl FromStr for PasswordHasherKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "argon2" => Ok(Self::Argon2),
            "bcrypt" => Ok(Self::Bcrypt),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Process settings other than JWT and argon2 cost, which their adapters load.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseSettings,
    pub run_migrations: bool,
    pub create_test_data: bool,
    pub password_hasher: PasswordHasherKind,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let min_connections = parse_var(&lookup, "DB_MIN_CONNECTIONS", 2u32)?;
        if min_connections > max_connections {
            return Err(ConfigError::Constraint(
                "DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", 8000u16)?,
            database: DatabaseSettings {
                url,
                max_connections,
                min_connections,
            },
            run_migrations: parse_flag(&lookup, "RUN_MIGRATIONS", true)?,
            create_test_data: parse_flag(&lookup, "CREATE_TEST_DATA", false)?,
            password_hasher: parse_var(&lookup, "PASSWORD_HASHER", PasswordHasherKind::Argon2)?,
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
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/db")]))
                .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 2);
        assert!(config.run_migrations);
        assert!(!config.create_test_data);
        assert_eq!(config.password_hasher, PasswordHasherKind::Argon2);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_values_are_reported_with_their_key() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn flags_and_hasher_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("RUN_MIGRATIONS", "false"),
            ("CREATE_TEST_DATA", "1"),
            ("PASSWORD_HASHER", "bcrypt"),
        ]))
        .unwrap();

        assert!(!config.run_migrations);
        assert!(config.create_test_data);
        assert_eq!(config.password_hasher, PasswordHasherKind::Bcrypt);
    }

    #[test]
    fn pool_bounds_are_checked() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/db"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("DB_MIN_CONNECTIONS", "5"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Constraint(_)));
    }
}
