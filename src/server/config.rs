use std::{fmt::Display, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE_NAME: &str = "user-orders";
const DEFAULT_PASSWORD_HASH_COST: u32 = 2;

pub struct Config {
    pub database_url: String,
    /// Explicit database name; when `None` the name embedded in `database_url` is used.
    pub database_name: Option<String>,

    pub port: u16,

    /// Argon2 time cost (number of passes) used when hashing passwords.
    pub password_hash_cost: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let password_hash_cost = optional_var("PASSWORD_HASH_COST", DEFAULT_PASSWORD_HASH_COST)?;
        if password_hash_cost == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "PASSWORD_HASH_COST".to_string(),
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            database_name: std::env::var("DATABASE_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty()),
            port: optional_var("PORT", DEFAULT_PORT)?,
            password_hash_cost,
        })
    }

    /// Database name to use when the connection string does not name one.
    pub fn fallback_database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
    }
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn optional_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
        Err(_) => {
            tracing::debug!("{} not set, using default", name);
            Ok(default)
        }
    }
}
