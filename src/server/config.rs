use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,

    pub bind_address: String,
    pub log_level: String,

    pub db_max_connections: u32,
    /// Insert the default plan types and features on startup when they are missing.
    pub seed_catalog: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "DB_MAX_CONNECTIONS".to_string(),
                    value,
                })?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let seed_catalog = match lookup("SEED_CATALOG") {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "SEED_CATALOG".to_string(),
                value,
            })?,
            None => false,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            db_max_connections,
            seed_catalog,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
