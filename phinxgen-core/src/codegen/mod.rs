//! Phinx migration code generation.
//!
//! # Module Structure
//! - `type_mapping`: MySQL to Phinx column type and attribute mapping
//! - `column`: single `addColumn` fragments
//! - `indexes`: index row grouping and `addIndex` fragments
//! - `foreign_keys`: `addForeignKey` fragments
//! - `table`: per-table builder chains
//!
//! This module assembles the pieces into one complete migration file:
//! fixed header (Phinx imports, class and `up()` opener), one block per
//! table in reader order, fixed footer. The output is an up-only
//! migration; no `down()` is generated.

pub mod column;
pub mod foreign_keys;
pub mod indexes;
pub mod table;
pub mod type_mapping;


use crate::models::TableSpec;

pub use column::render_column;
pub use foreign_keys::render_foreign_keys;
pub use indexes::{group_index_rows, render_indexes};
pub use table::render_table;
pub use type_mapping::{
    ColumnAttribute, Limit, MappedColumn, PhinxType, map_column, map_column_type,
};

/// One indentation step in the generated PHP source.
const TAB: &str = "    ";

/// Base indentation level of table blocks inside the `up()` method body.
const BODY_INDENT: usize = 2;

/// Returns `level` steps of indentation.
pub(crate) fn indentation(level: usize) -> String {
    TAB.repeat(level)
}

/// Renders the complete migration document for the given tables.
///
/// Table order is preserved as given; the header comment names the source
/// database. An empty table list still yields a syntactically complete
/// migration with an empty `up()` body.
pub fn render_migration(tables: &[TableSpec], database: &str) -> String {
    let mut document = String::new();

    document.push_str("<?php\n");
    document.push_str("use Phinx\\Migration\\AbstractMigration;\n");
    document.push_str("use Phinx\\Db\\Adapter\\MysqlAdapter;\n");
    document.push('\n');
    document.push_str("class InitialMigration extends AbstractMigration\n");
    document.push_str("{\n");
    document.push_str("    public function up()\n");
    document.push_str("    {\n");
    document.push_str(&format!(
        "        // Automatically created phinx migration commands for tables from database {}\n",
        database
    ));
    document.push('\n');

    let blocks: Vec<String> = tables
        .iter()
        .map(|table| render_table(table, BODY_INDENT))
        .collect();
    document.push_str(&blocks.join("\n"));
    document.push('\n');

    document.push_str("    }\n");
    document.push_str("}\n");

    document
}
