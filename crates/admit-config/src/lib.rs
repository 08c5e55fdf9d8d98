//! Runtime configuration for the admissions service.
//!
//! All knobs come from environment variables so nothing sensitive lives in
//! source. The signing secret, the credential pair, and the model store
//! location are required; the rest have defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Errors from reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Secret used to sign and verify access tokens.
    pub secret_key: String,
    /// Recognized username.
    pub username: String,
    /// Recognized password.
    pub password: String,
    /// Root directory of the model store.
    pub model_dir: PathBuf,
    /// Name of the model to serve from the store.
    pub model_name: String,
    /// Access token lifetime in minutes.
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Reads configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: env::var("ADMIT_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            secret_key: require("ADMIT_SECRET_KEY")?,
            username: require("ADMIT_USERNAME")?,
            password: require("ADMIT_PASSWORD")?,
            model_dir: require("ADMIT_MODEL_DIR")?.into(),
            model_name: env::var("ADMIT_MODEL_NAME").unwrap_or_else(|_| "admissions".into()),
            token_ttl_minutes: parse_or("ADMIT_TOKEN_TTL_MINUTES", 60)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the shared process environment is touched from one
    // place only.
    #[test]
    fn test_from_env() {
        for name in [
            "ADMIT_BIND_ADDR",
            "ADMIT_SECRET_KEY",
            "ADMIT_USERNAME",
            "ADMIT_PASSWORD",
            "ADMIT_MODEL_DIR",
            "ADMIT_MODEL_NAME",
            "ADMIT_TOKEN_TTL_MINUTES",
        ] {
            env::remove_var(name);
        }

        match Config::from_env() {
            Err(ConfigError::Missing("ADMIT_SECRET_KEY")) => {}
            other => panic!("expected missing secret key, got {other:?}"),
        }

        env::set_var("ADMIT_SECRET_KEY", "s3cret");
        env::set_var("ADMIT_USERNAME", "admin");
        env::set_var("ADMIT_PASSWORD", "admin123");
        env::set_var("ADMIT_MODEL_DIR", "/tmp/models");

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.model_name, "admissions");
        assert_eq!(config.token_ttl_minutes, 60);
        assert_eq!(config.model_dir, PathBuf::from("/tmp/models"));

        env::set_var("ADMIT_TOKEN_TTL_MINUTES", "30");
        let config = Config::from_env().unwrap();
        assert_eq!(config.token_ttl_minutes, 30);

        env::set_var("ADMIT_TOKEN_TTL_MINUTES", "soon");
        match Config::from_env() {
            Err(ConfigError::Invalid { name, value }) => {
                assert_eq!(name, "ADMIT_TOKEN_TTL_MINUTES");
                assert_eq!(value, "soon");
            }
            other => panic!("expected invalid ttl, got {other:?}"),
        }
    }
}
