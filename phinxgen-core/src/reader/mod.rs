//! Schema reading: the seam between the database and code generation.
//!
//! # Module Structure
//! - `connection`: connection configuration and pool construction
//! - `introspection`: the INFORMATION_SCHEMA queries
//!
//! The generation core consumes the [`SchemaReader`] trait, so it can be
//! exercised against an in-memory fake; [`MySqlSchemaReader`] is the real
//! implementation over a sqlx connection pool.

pub mod connection;
pub mod introspection;

pub use connection::{ConnectionConfig, DEFAULT_HOST, DEFAULT_PORT};

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{ColumnDescriptor, ForeignKeyRecord, IndexRecord};
use crate::Result;

/// Supplies raw schema metadata for one database.
#[async_trait]
pub trait SchemaReader {
    /// Lists the table names of the database, in generation order.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Lists the columns of a table in ordinal order.
    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// Lists raw per-column index rows of a table.
    async fn list_index_rows(&self, table: &str) -> Result<Vec<IndexRecord>>;

    /// Lists the foreign key relations of a table.
    async fn list_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRecord>>;
}

/// MySQL-backed schema reader.
pub struct MySqlSchemaReader {
    pool: MySqlPool,
    config: ConnectionConfig,
}

impl std::fmt::Debug for MySqlSchemaReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSchemaReader")
            .field("config", &self.config)
            .field("pool_size", &self.pool.size())
            .finish_non_exhaustive()
    }
}

impl MySqlSchemaReader {
    /// Connects to the configured server.
    ///
    /// # Errors
    /// Returns an error naming the database, host and port when the
    /// server cannot be reached or the configuration is invalid.
    pub async fn connect(config: ConnectionConfig) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            "Connecting to database {} on {}:{}",
            config.database,
            config.host,
            config.port
        );
        let pool = connection::create_pool(&config).await?;

        Ok(Self { pool, config })
    }

    /// Name of the database this reader is connected to.
    pub fn database(&self) -> &str {
        &self.config.database
    }

    /// Releases the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SchemaReader for MySqlSchemaReader {
    async fn list_tables(&self) -> Result<Vec<String>> {
        introspection::list_tables(&self.pool, &self.config.database).await
    }

    async fn list_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        introspection::list_columns(&self.pool, &self.config.database, table).await
    }

    async fn list_index_rows(&self, table: &str) -> Result<Vec<IndexRecord>> {
        introspection::list_index_rows(&self.pool, &self.config.database, table).await
    }

    async fn list_foreign_keys(&self, table: &str) -> Result<Vec<ForeignKeyRecord>> {
        introspection::list_foreign_keys(&self.pool, &self.config.database, table).await
    }
}
