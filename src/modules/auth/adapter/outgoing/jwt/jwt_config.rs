use std::env;

use crate::shared::config::{parse_var, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // Expiration in seconds
    pub refresh_token_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 wants at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Constraint(
                "JWT_SECRET must be at least 32 characters long for HS256 algorithm".to_string(),
            ));
        }

        let access_token_expiry = parse_var(&lookup, "JWT_ACCESS_EXPIRY", 1800i64)?;
        let refresh_token_expiry = parse_var(&lookup, "JWT_REFRESH_EXPIRY", 604800i64)?;

        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Constraint(
                "JWT_ACCESS_EXPIRY must be between 1 and 86400 seconds (24 hours)".to_string(),
            ));
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Constraint(
                "JWT_REFRESH_EXPIRY must be greater than JWT_ACCESS_EXPIRY".to_string(),
            ));
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| "social-backend".to_string());

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn lookup_with(
        pairs: Vec<(&'static str, &'static str)>,
    ) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults() {
        let config = JwtConfig::from_lookup(lookup_with(vec![("JWT_SECRET", SECRET)])).unwrap();

        assert_eq!(config.issuer, "social-backend");
        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 604800);
    }

    #[test]
    fn test_missing_secret() {
        let err = JwtConfig::from_lookup(lookup_with(vec![])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("JWT_SECRET"));
    }

    #[test]
    fn test_short_secret_rejected() {
        let err = JwtConfig::from_lookup(lookup_with(vec![("JWT_SECRET", "short")])).unwrap_err();
        assert!(matches!(err, ConfigError::Constraint(_)));
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let err = JwtConfig::from_lookup(lookup_with(vec![
            ("JWT_SECRET", SECRET),
            ("JWT_ACCESS_EXPIRY", "3600"),
            ("JWT_REFRESH_EXPIRY", "3600"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Constraint(msg) if msg.contains("JWT_REFRESH_EXPIRY")));
    }

    #[test]
    fn test_non_numeric_expiry() {
        let err = JwtConfig::from_lookup(lookup_with(vec![
            ("JWT_SECRET", SECRET),
            ("JWT_ACCESS_EXPIRY", "soon"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { key: "JWT_ACCESS_EXPIRY", .. }));
    }
}
