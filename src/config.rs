//! Application-level configuration resolved from the process environment.

use std::env;

use tracing::{info, warn};

/// Port used when neither `PORT` nor `SERVER_PORT` is set.
const DEFAULT_PORT: u16 = 8080;
/// SQLite location used when `DATABASE_URL` is not set.
const DEFAULT_DATABASE_URL: &str = "sqlite://stop_the_clock.db";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// TCP port the HTTP server listens on.
    pub port: u16,
    /// sqlx connection URL for the SQLite database.
    pub database_url: String,
}

impl AppConfig {
    /// Resolve the configuration from environment variables, falling back to
    /// built-in defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .or_else(|_| env::var("SERVER_PORT"))
            .ok()
            .map(|value| match value.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(%value, "invalid port in environment; using default");
                    DEFAULT_PORT
                }
            })
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        info!(port, %database_url, "resolved configuration");

        Self { port, database_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }
}
