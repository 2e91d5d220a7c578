use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which `ContentStore` backend the process runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => bail!("Unknown CONTENT_STORE '{other}' (expected 'postgres' or 'memory')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Required when `store_backend` is Postgres.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub seed_on_startup: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let store_backend: StoreBackend = std::env::var("CONTENT_STORE")
            .unwrap_or_else(|_| "postgres".to_string())
            .parse()?;

        let database_url = match store_backend {
            StoreBackend::Postgres => Some(require_env("DATABASE_URL")?),
            StoreBackend::Memory => std::env::var("DATABASE_URL").ok(),
        };

        Ok(Config {
            store_backend,
            database_url,
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            seed_on_startup: parse_bool(
                &std::env::var("SEED_ON_STARTUP").unwrap_or_else(|_| "true".to_string()),
            )
            .context("SEED_ON_STARTUP must be true or false")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("'{other}' is not a boolean"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("postgres".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert_eq!(" Memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
