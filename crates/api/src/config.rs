use anyhow::{anyhow, bail, Context, Result};
use std::env;
use std::str::FromStr;

/// Which persistence backend the server runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    Postgres,
    Memory,
}

impl FromStr for Storage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(Storage::Postgres),
            "memory" => Ok(Storage::Memory),
            _ => Err(anyhow!("Unknown storage backend: {}", s)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub storage: Storage,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub gql_introspection: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage = match lookup("STORAGE") {
            Some(value) => value.parse()?,
            None => Storage::Postgres,
        };

        let database_url = lookup("DATABASE_URL");
        if storage == Storage::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORAGE=postgres");
        }

        Ok(Self {
            storage,
            database_url,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(30),
            skip_migrations: lookup("SKIP_MIGRATIONS")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".into())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            allowed_origins: lookup("ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000,http://localhost:3001".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            gql_introspection: lookup("GQL_INTROSPECTION")
                .map(|v| v == "true")
                .unwrap_or(false),
        })
    }
}
