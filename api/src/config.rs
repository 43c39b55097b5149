//! Application configuration

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Fixed listen port
pub const PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info,presence_server=debug";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// PostgreSQL host
    pub database_host: String,
    /// PostgreSQL port
    pub database_port: u16,
    /// PostgreSQL user
    pub database_user: String,
    /// PostgreSQL password
    pub database_password: Option<String>,
    /// PostgreSQL database name
    pub database_name: String,
    /// TLS mode for the database connection
    pub database_ssl_mode: PgSslMode,
    /// Tracing filter directives
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: "0.0.0.0".to_string(),
            port: PORT,
            database_host: lookup("DATABASE_HOST").unwrap_or_else(|| "localhost".to_string()),
            database_port: lookup("DATABASE_PORT")
                .unwrap_or_else(|| "5432".to_string())
                .parse()
                .context("Invalid DATABASE_PORT")?,
            database_user: lookup("DATABASE_USER").unwrap_or_else(|| "postgres".to_string()),
            database_password: lookup("DATABASE_PASSWORD"),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "postgres".to_string()),
            database_ssl_mode: lookup("DATABASE_SSLMODE")
                .unwrap_or_else(|| "require".to_string())
                .parse()
                .context("Invalid DATABASE_SSLMODE")?,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    /// Build connection options for the players database
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.database_host)
            .port(self.database_port)
            .username(&self.database_user)
            .database(&self.database_name)
            .ssl_mode(self.database_ssl_mode);

        match self.database_password {
            Some(ref password) => options.password(password),
            None => options,
        }
    }
}
