//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults, so `cargo run -p atlas-server` works out of the box.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port the RPC surface listens on
    pub port: u16,

    /// Path to the SQLite database file
    pub database_path: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable        | Default           |
    /// |-----------------|-------------------|
    /// | `SERVER_PORT`   | `2022`            |
    /// | `DATABASE_PATH` | `./data/atlas.db` |
    pub fn load() -> Result<Self, ConfigError> {
        let config = ServerConfig {
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "2022".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,

            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/atlas.db".to_string()),
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
