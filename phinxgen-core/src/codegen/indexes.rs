//! Grouping of raw index rows and rendering of `addIndex` calls.

use super::indentation;
use crate::models::{IndexDefinition, IndexRecord};

/// Synthetic surrogate primary-key column handled implicitly by Phinx.
const PRIMARY_KEY_COLUMN: &str = "id";

/// Groups raw per-column index rows into named index definitions.
///
/// Rows are accumulated under their index name in first-seen order, and
/// column order within an index follows row order. Rows covering the
/// column literally named `id` are dropped: Phinx declares that column
/// and its primary key itself.
//
// TODO key off Key_name == PRIMARY instead of the id column name once
// non-id primary keys are supported end to end.
pub fn group_index_rows(rows: &[IndexRecord]) -> Vec<IndexDefinition> {
    let mut indexes: Vec<IndexDefinition> = Vec::new();

    for row in rows {
        if row.column_name == PRIMARY_KEY_COLUMN {
            continue;
        }

        match indexes.iter_mut().find(|index| index.name == row.index_name) {
            Some(index) => index.columns.push(row.column_name.clone()),
            None => indexes.push(IndexDefinition {
                name: row.index_name.clone(),
                columns: vec![row.column_name.clone()],
                unique: row.is_unique,
                fulltext: row.is_fulltext,
            }),
        }
    }

    indexes
}

/// Renders index definitions as `->addIndex(...)` fragments.
///
/// Per index the option order is: unique flag, fulltext type, then always
/// the name flag last.
pub fn render_indexes(indexes: &[IndexDefinition], indent: usize) -> Vec<String> {
    let ind = indentation(indent);

    indexes
        .iter()
        .map(|index| {
            let columns = format!("array('{}')", index.columns.join("', '"));

            let mut options = String::from("array(");
            let mut needs_comma = false;

            if index.unique {
                options.push_str("'unique' => true");
                needs_comma = true;
            }

            if index.fulltext {
                if needs_comma {
                    options.push_str(", ");
                }
                options.push_str("'type' => 'fulltext'");
                needs_comma = true;
            }

            if needs_comma {
                options.push_str(", ");
            }
            options.push_str(&format!("'name' => '{}')", index.name));

            format!("{}->addIndex({}, {})", ind, columns, options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index_name: &str, column_name: &str, is_unique: bool) -> IndexRecord {
        IndexRecord {
            index_name: index_name.to_string(),
            column_name: column_name.to_string(),
            is_unique,
            is_fulltext: false,
        }
    }

    #[test]
    fn groups_columns_under_index_in_row_order() {
        let rows = vec![
            row("by_merchant", "merchant_id", false),
            row("by_merchant", "added_date", false),
            row("by_status", "status", false),
        ];

        let indexes = group_index_rows(&rows);
        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes[0].name, "by_merchant");
        assert_eq!(indexes[0].columns, vec!["merchant_id", "added_date"]);
        assert_eq!(indexes[1].columns, vec!["status"]);
    }

    #[test]
    fn drops_rows_for_implicit_primary_key_column() {
        let rows = vec![row("PRIMARY", "id", true), row("by_status", "status", false)];

        let indexes = group_index_rows(&rows);
        assert_eq!(indexes.len(), 1);
        assert_eq!(indexes[0].name, "by_status");
    }

    #[test]
    fn interleaved_rows_keep_first_seen_index_order() {
        let rows = vec![
            row("a", "x", false),
            row("b", "y", false),
            row("a", "z", false),
        ];

        let indexes = group_index_rows(&rows);
        assert_eq!(indexes[0].name, "a");
        assert_eq!(indexes[0].columns, vec!["x", "z"]);
        assert_eq!(indexes[1].name, "b");
    }

    #[test]
    fn name_option_is_always_last() {
        let unique_fulltext = IndexDefinition {
            name: "search".to_string(),
            columns: vec!["body".to_string()],
            unique: true,
            fulltext: true,
        };

        let rendered = render_indexes(&[unique_fulltext], 0);
        assert_eq!(
            rendered[0],
            "->addIndex(array('body'), array('unique' => true, 'type' => 'fulltext', 'name' => 'search'))"
        );
    }

    #[test]
    fn plain_index_renders_only_name_option() {
        let plain = IndexDefinition {
            name: "by_status".to_string(),
            columns: vec!["status".to_string()],
            unique: false,
            fulltext: false,
        };

        let rendered = render_indexes(&[plain], 0);
        assert_eq!(
            rendered[0],
            "->addIndex(array('status'), array('name' => 'by_status'))"
        );
    }
}
