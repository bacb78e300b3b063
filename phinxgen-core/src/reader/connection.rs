//! Connection configuration and pool construction.
//!
//! Connection parameters travel as an explicit [`ConnectionConfig`] value,
//! never as process-wide state, and the pool is built from discrete fields
//! via `MySqlConnectOptions` so the password never appears in a URL or an
//! error message.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;

use crate::error::PhinxgenError;
use crate::Result;

/// Default MySQL host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default MySQL port.
pub const DEFAULT_PORT: u16 = 3306;

/// Connection parameters for the source database.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Database (schema) to introspect.
    pub database: String,
    /// MySQL user name.
    pub user: String,
    /// MySQL password.
    pub password: String,
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("database", &self.database)
            .field("user", &self.user)
            .field("host", &self.host)
            .field("port", &self.port)
            // password intentionally omitted
            .finish_non_exhaustive()
    }
}

impl ConnectionConfig {
    /// Creates a configuration targeting `localhost:3306`.
    pub fn new(
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
            password: password.into(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }

    /// Sets the server host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the server port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Validates the configuration before any connection attempt.
    pub fn validate(&self) -> Result<()> {
        if self.database.is_empty() {
            return Err(PhinxgenError::configuration("Database name is empty"));
        }
        if self.host.is_empty() {
            return Err(PhinxgenError::configuration("Host is empty"));
        }
        if self.port == 0 {
            return Err(PhinxgenError::configuration(
                "Invalid port number: must be greater than 0",
            ));
        }
        Ok(())
    }
}

/// Creates a connection pool for the configured server.
///
/// Connects eagerly so a bad target fails here, before anything has been
/// written to stdout, with an error naming the database, host and port.
pub(crate) async fn create_pool(config: &ConnectionConfig) -> Result<MySqlPool> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    // One pass, one connection.
    MySqlPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(options)
        .await
        .map_err(|e| PhinxgenError::connection_failed(&config.database, &config.host, config.port, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_localhost_3306() {
        let config = ConnectionConfig::new("payments", "root", "secret");
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ConnectionConfig::new("payments", "root", "secret").with_port(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_database_is_rejected() {
        let config = ConnectionConfig::new("", "root", "secret");
        assert!(config.validate().is_err());
    }

    #[test]
    fn debug_never_exposes_password() {
        let config = ConnectionConfig::new("payments", "root", "hunter2")
            .with_host("db.internal")
            .with_port(3307);
        let debugged = format!("{:?}", config);
        assert!(!debugged.contains("hunter2"));
        assert!(debugged.contains("db.internal"));
    }
}
