use std::{fmt::Display, str::FromStr};

use crate::error::config::ConfigError;

/// Pool size used when `DATABASE_MAX_CONNECTIONS` is not set
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_sql_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_max_connections = optional_var::<u32>("DATABASE_MAX_CONNECTIONS")?
            .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS);

        if database_max_connections == 0 {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            database_max_connections,
            database_sql_logging: optional_var::<bool>("DATABASE_SQL_LOGGING")?.unwrap_or(false),
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}
