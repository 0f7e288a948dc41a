//! Process configuration, read from the environment once dotenv files are applied.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

use crate::constants::DEFAULT_PORT;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("DATABASE_URL is not set; create .env from .env.example")]
    MissingDatabaseUrl,

    #[error("ADDR `{value}` is not a valid socket address")]
    InvalidAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Config {
    /// Postgres connection string
    pub(crate) database_url: String,
    pub(crate) addr: SocketAddr,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let addr = match lookup("ADDR").filter(|addr| !addr.is_empty()) {
            Some(value) => value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        Ok(Config { database_url, addr })
    }
}

/// Apply `../.env`, falling back to `./.env`. Variables already set in the
/// process environment win over both.
pub(crate) fn load_dotenv() {
    if dotenv::from_path("../.env").is_err() {
        dotenv::dotenv().ok();
    }
}
