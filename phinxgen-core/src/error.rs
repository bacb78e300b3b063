//! Error types for phinxgen.
//!
//! Connection failures carry the target database, host and port so the
//! operator can tell which server was attempted. Credentials never appear
//! in any error message.

use thiserror::Error;

/// Main error type for phinxgen operations.
#[derive(Debug, Error)]
pub enum PhinxgenError {
    /// Database connection failed
    #[error("Unable to connect to database {database} on {host}:{port}")]
    Connection {
        /// Database name that was attempted.
        database: String,
        /// Host that was attempted.
        host: String,
        /// Port that was attempted.
        port: u16,
        /// Underlying driver error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema introspection query failed
    #[error("Schema introspection failed: {context}")]
    Introspection {
        /// What was being queried when the failure occurred.
        context: String,
        /// Underlying driver error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Human-readable description of the problem.
        message: String,
    },
}

/// Convenience type alias for Results with [`PhinxgenError`].
pub type Result<T> = std::result::Result<T, PhinxgenError>;

impl PhinxgenError {
    /// Creates a connection error naming the attempted target.
    pub fn connection_failed<E>(database: &str, host: &str, port: u16, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            database: database.to_string(),
            host: host.to_string(),
            port,
            source: Box::new(error),
        }
    }

    /// Creates an introspection error with context.
    pub fn introspection_failed<E>(context: impl Into<String>, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Introspection {
            context: context.into(),
            source: Box::new(error),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_names_target() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = PhinxgenError::connection_failed("payments", "db.internal", 3307, io);

        let message = error.to_string();
        assert!(message.contains("payments"));
        assert!(message.contains("db.internal:3307"));
    }

    #[test]
    fn introspection_error_carries_context() {
        let io = std::io::Error::other("boom");
        let error = PhinxgenError::introspection_failed("Failed to enumerate tables", io);
        assert!(error.to_string().contains("Failed to enumerate tables"));
    }

    #[test]
    fn configuration_error_display() {
        let error = PhinxgenError::configuration("port must be non-zero");
        assert!(error.to_string().contains("port must be non-zero"));
    }
}
