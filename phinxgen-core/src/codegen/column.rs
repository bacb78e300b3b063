//! Rendering of single `addColumn` builder calls.

use super::indentation;
use super::type_mapping::{ColumnAttribute, map_column};
use crate::models::ColumnDescriptor;

/// Renders an attribute list as a PHP `array(...)` literal.
fn render_attributes(attributes: &[ColumnAttribute]) -> String {
    let parts: Vec<String> = attributes.iter().map(ToString::to_string).collect();
    format!("array({})", parts.join(", "))
}

/// Renders one column as a `->addColumn(...)` fragment at the given
/// indentation level.
pub fn render_column(column: &ColumnDescriptor, indent: usize) -> String {
    let mapped = map_column(column);
    format!(
        "{}->addColumn('{}', '{}', {})",
        indentation(indent),
        column.name,
        mapped.phinx_type,
        render_attributes(&mapped.attributes)
    )
}
