//! INFORMATION_SCHEMA queries backing the MySQL schema reader.
//!
//! All queries use bound parameters and `CAST(... AS CHAR)` to avoid
//! VARBINARY decoding issues on MySQL 8.0+. Result ordering is made
//! explicit with `ORDER BY` so generated output is stable across runs.

use sqlx::{MySqlPool, Row};

use crate::error::PhinxgenError;
use crate::models::{ColumnDescriptor, DefaultValue, ForeignKeyRecord, IndexRecord};
use crate::Result;

/// Lists base table names in the schema, alphabetically.
pub(crate) async fn list_tables(pool: &MySqlPool, db_name: &str) -> Result<Vec<String>> {
    let tables_query = r#"
        SELECT CAST(TABLE_NAME AS CHAR) as TABLE_NAME
        FROM INFORMATION_SCHEMA.TABLES
        WHERE TABLE_SCHEMA = ?
        AND TABLE_TYPE = 'BASE TABLE'
        ORDER BY TABLE_NAME
    "#;

    sqlx::query_scalar(tables_query)
        .bind(db_name)
        .fetch_all(pool)
        .await
        .map_err(|e| PhinxgenError::introspection_failed("Failed to enumerate tables", e))
}

/// Lists the columns of a table in ordinal order.
pub(crate) async fn list_columns(
    pool: &MySqlPool,
    db_name: &str,
    table_name: &str,
) -> Result<Vec<ColumnDescriptor>> {
    let columns_query = r#"
        SELECT
            CAST(COLUMN_NAME AS CHAR) as COLUMN_NAME,
            CAST(COLUMN_TYPE AS CHAR) as COLUMN_TYPE,
            CAST(IS_NULLABLE AS CHAR) as IS_NULLABLE,
            CAST(COLUMN_DEFAULT AS CHAR) as COLUMN_DEFAULT,
            CAST(EXTRA AS CHAR) as EXTRA
        FROM INFORMATION_SCHEMA.COLUMNS
        WHERE TABLE_SCHEMA = ?
        AND TABLE_NAME = ?
        ORDER BY ORDINAL_POSITION
    "#;

    let column_rows = sqlx::query(columns_query)
        .bind(db_name)
        .bind(table_name)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            PhinxgenError::introspection_failed(
                format!("Failed to collect columns for table '{}'", table_name),
                e,
            )
        })?;

    let mut columns = Vec::new();

    for row in &column_rows {
        let name: String = row.try_get("COLUMN_NAME").map_err(|e| {
            PhinxgenError::introspection_failed("Failed to parse column name", e)
        })?;
        let native_type: String = row.try_get("COLUMN_TYPE").unwrap_or_default();
        let is_nullable: String = row.try_get("IS_NULLABLE").unwrap_or_default();
        // COLUMN_DEFAULT arrives as a string for every type, so defaults
        // always render quoted, including numeric ones.
        let default: Option<String> = row.try_get("COLUMN_DEFAULT").ok();
        let extra: String = row.try_get("EXTRA").unwrap_or_default();

        columns.push(ColumnDescriptor {
            name,
            native_type,
            nullable: is_nullable.to_uppercase() == "YES",
            default: default.map(DefaultValue::Text),
            extra,
        });
    }

    Ok(columns)
}

/// Lists raw index rows for a table, one row per column-in-index, ordered
/// by index name and position within the index.
pub(crate) async fn list_index_rows(
    pool: &MySqlPool,
    db_name: &str,
    table_name: &str,
) -> Result<Vec<IndexRecord>> {
    let index_query = r#"
        SELECT
            CAST(INDEX_NAME AS CHAR) as INDEX_NAME,
            CAST(COLUMN_NAME AS CHAR) as COLUMN_NAME,
            NON_UNIQUE,
            CAST(INDEX_TYPE AS CHAR) as INDEX_TYPE
        FROM INFORMATION_SCHEMA.STATISTICS
        WHERE TABLE_SCHEMA = ?
        AND TABLE_NAME = ?
        ORDER BY INDEX_NAME, SEQ_IN_INDEX
    "#;

    let index_rows = sqlx::query(index_query)
        .bind(db_name)
        .bind(table_name)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            PhinxgenError::introspection_failed(
                format!("Failed to collect indexes for table '{}'", table_name),
                e,
            )
        })?;

    let mut records = Vec::new();

    for row in &index_rows {
        let index_name: String = row.try_get("INDEX_NAME").unwrap_or_default();
        let column_name: String = row.try_get("COLUMN_NAME").unwrap_or_default();
        let non_unique: i64 = row.try_get("NON_UNIQUE").unwrap_or(1);
        let index_type: String = row.try_get("INDEX_TYPE").unwrap_or_default();

        records.push(IndexRecord {
            index_name,
            column_name,
            is_unique: non_unique == 0,
            is_fulltext: index_type == "FULLTEXT",
        });
    }

    Ok(records)
}

/// Lists foreign key relations for a table.
///
/// Only rows belonging to a constraint of type `FOREIGN KEY` with a
/// non-null referenced table are returned, scoped to the current schema.
pub(crate) async fn list_foreign_keys(
    pool: &MySqlPool,
    db_name: &str,
    table_name: &str,
) -> Result<Vec<ForeignKeyRecord>> {
    let fk_query = r#"
        SELECT
            CAST(kcu.COLUMN_NAME AS CHAR) as COLUMN_NAME,
            CAST(kcu.REFERENCED_TABLE_NAME AS CHAR) as REFERENCED_TABLE_NAME,
            CAST(kcu.REFERENCED_COLUMN_NAME AS CHAR) as REFERENCED_COLUMN_NAME,
            CAST(rc.UPDATE_RULE AS CHAR) as UPDATE_RULE,
            CAST(rc.DELETE_RULE AS CHAR) as DELETE_RULE
        FROM INFORMATION_SCHEMA.KEY_COLUMN_USAGE kcu
        JOIN INFORMATION_SCHEMA.REFERENTIAL_CONSTRAINTS rc
            ON kcu.CONSTRAINT_NAME = rc.CONSTRAINT_NAME
            AND kcu.TABLE_SCHEMA = rc.CONSTRAINT_SCHEMA
        JOIN INFORMATION_SCHEMA.TABLE_CONSTRAINTS tc
            ON kcu.CONSTRAINT_NAME = tc.CONSTRAINT_NAME
            AND kcu.TABLE_SCHEMA = tc.TABLE_SCHEMA
            AND kcu.TABLE_NAME = tc.TABLE_NAME
        WHERE kcu.TABLE_SCHEMA = ?
        AND kcu.TABLE_NAME = ?
        AND kcu.REFERENCED_TABLE_NAME IS NOT NULL
        AND tc.CONSTRAINT_TYPE = 'FOREIGN KEY'
        ORDER BY kcu.CONSTRAINT_NAME, kcu.ORDINAL_POSITION
    "#;

    let fk_rows = sqlx::query(fk_query)
        .bind(db_name)
        .bind(table_name)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            PhinxgenError::introspection_failed(
                format!("Failed to collect foreign keys for table '{}'", table_name),
                e,
            )
        })?;

    let mut records = Vec::new();

    for row in &fk_rows {
        records.push(ForeignKeyRecord {
            column_name: row.try_get("COLUMN_NAME").unwrap_or_default(),
            referenced_table: row.try_get("REFERENCED_TABLE_NAME").unwrap_or_default(),
            referenced_column: row.try_get("REFERENCED_COLUMN_NAME").unwrap_or_default(),
            update_rule: row.try_get("UPDATE_RULE").unwrap_or_default(),
            delete_rule: row.try_get("DELETE_RULE").unwrap_or_default(),
        });
    }

    Ok(records)
}
