//! Rendering of `addForeignKey` builder calls.

use super::indentation;
use crate::models::ForeignKeyRecord;

/// Converts a referential rule into the symbolic token Phinx expects,
/// e.g. `NO ACTION` becomes `NO_ACTION`.
fn rule_token(rule: &str) -> String {
    rule.replace(' ', "_")
}

/// Renders foreign key records as `->addForeignKey(...)` fragments, one
/// per record. Records are independent; composite foreign keys are not
/// modeled.
pub fn render_foreign_keys(foreign_keys: &[ForeignKeyRecord], indent: usize) -> Vec<String> {
    let ind = indentation(indent);

    foreign_keys
        .iter()
        .map(|fk| {
            format!(
                "{}->addForeignKey('{}', '{}', '{}', array('delete' => '{}','update' => '{}'))",
                ind,
                fk.column_name,
                fk.referenced_table,
                fk.referenced_column,
                rule_token(&fk.delete_rule),
                rule_token(&fk.update_rule),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_have_spaces_replaced_by_underscores() {
        let fk = ForeignKeyRecord {
            column_name: "merchant_id".to_string(),
            referenced_table: "merchants".to_string(),
            referenced_column: "merchant_id".to_string(),
            update_rule: "NO ACTION".to_string(),
            delete_rule: "CASCADE".to_string(),
        };

        let rendered = render_foreign_keys(&[fk], 0);
        assert_eq!(
            rendered[0],
            "->addForeignKey('merchant_id', 'merchants', 'merchant_id', \
             array('delete' => 'CASCADE','update' => 'NO_ACTION'))"
        );
    }

    #[test]
    fn each_record_renders_independently() {
        let fk = |column: &str| ForeignKeyRecord {
            column_name: column.to_string(),
            referenced_table: "transactions".to_string(),
            referenced_column: "transaction_id".to_string(),
            update_rule: "RESTRICT".to_string(),
            delete_rule: "SET NULL".to_string(),
        };

        let rendered = render_foreign_keys(&[fk("transaction_id"), fk("original_transaction_id")], 1);
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("    ->addForeignKey('transaction_id'"));
        assert!(rendered[1].contains("'delete' => 'SET_NULL'"));
    }
}
