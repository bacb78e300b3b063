//! Rendering of complete per-table migration blocks.

use super::column::render_column;
use super::foreign_keys::render_foreign_keys;
use super::indentation;
use super::indexes::render_indexes;
use crate::models::TableSpec;

/// Synthetic surrogate primary-key column handled implicitly by Phinx.
const PRIMARY_KEY_COLUMN: &str = "id";

/// Renders one table as a builder chain: comment, `$this->table(...)`,
/// column fragments, foreign key fragments, index fragments, `->create();`
/// and a trailing blank separator.
///
/// A column literally named `id` is never rendered; Phinx adds it
/// implicitly on table creation. A table with no other columns, foreign
/// keys or indexes still emits the header and create call.
pub fn render_table(table: &TableSpec, indent: usize) -> String {
    let ind = indentation(indent);

    let mut output = Vec::new();
    output.push(format!("{}// Migration for table {}", ind, table.name));
    output.push(format!("{}$table = $this->table('{}');", ind, table.name));
    output.push(format!("{}$table", ind));

    for column in &table.columns {
        if column.name != PRIMARY_KEY_COLUMN {
            output.push(render_column(column, indent + 1));
        }
    }

    let foreign_keys = render_foreign_keys(&table.foreign_keys, indent + 1);
    if !foreign_keys.is_empty() {
        output.push(foreign_keys.join("\n"));
    }

    let indexes = render_indexes(&table.indexes, indent + 1);
    if !indexes.is_empty() {
        output.push(indexes.join("\n"));
    }

    output.push(format!("{}    ->create();", ind));
    output.push("\n".to_string());

    output.join("\n")
}
