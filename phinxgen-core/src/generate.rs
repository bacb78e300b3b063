//! The one-pass generation driver.
//!
//! One pass over tables, one pass per table over columns, index rows and
//! foreign keys, then one rendered document. Any query failure propagates
//! and ends the run; there are no retries and no partial output.

use crate::codegen::{group_index_rows, render_migration};
use crate::models::TableSpec;
use crate::reader::SchemaReader;
use crate::Result;

/// Assembles a [`TableSpec`] per table, in the reader's table order.
pub async fn collect_tables<R>(reader: &R) -> Result<Vec<TableSpec>>
where
    R: SchemaReader + Sync,
{
    let table_names = reader.list_tables().await?;
    tracing::info!("Found {} tables", table_names.len());

    let mut tables = Vec::with_capacity(table_names.len());

    for name in table_names {
        let columns = reader.list_columns(&name).await?;
        let index_rows = reader.list_index_rows(&name).await?;
        let foreign_keys = reader.list_foreign_keys(&name).await?;
        let indexes = group_index_rows(&index_rows);

        tracing::debug!(
            "Table '{}': {} columns, {} indexes, {} foreign keys",
            name,
            columns.len(),
            indexes.len(),
            foreign_keys.len()
        );

        tables.push(TableSpec {
            name,
            columns,
            indexes,
            foreign_keys,
        });
    }

    Ok(tables)
}

/// Reads the whole schema and renders the migration document.
pub async fn generate_migration<R>(reader: &R, database: &str) -> Result<String>
where
    R: SchemaReader + Sync,
{
    let tables = collect_tables(reader).await?;
    Ok(render_migration(&tables, database))
}
