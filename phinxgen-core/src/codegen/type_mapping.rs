//! MySQL to Phinx column type and attribute mapping.
//!
//! The mapping covers a fixed subset of MySQL's type system. Anything
//! outside it maps to a bracketed passthrough of the native keyword, e.g.
//! `[bigint]`, so the generated file stays syntactically complete and the
//! gap is visible to a reviewer instead of aborting the run.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ColumnDescriptor, DefaultValue};

/// Trailing length modifier, e.g. the `255` in `varchar(255)`.
static TRAILING_LIMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\)$").expect("Invalid limit pattern"));

/// Unsigned integer marker, e.g. `int(10) unsigned`.
static UNSIGNED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\) unsigned$").expect("Invalid unsigned pattern"));

/// Phinx column type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhinxType {
    /// tinyint, smallint, int, mediumint
    Integer,
    /// decimal
    Decimal,
    /// timestamp
    Timestamp,
    /// date
    Date,
    /// datetime
    DateTime,
    /// enum
    Enum,
    /// char
    Char,
    /// text, tinytext
    Text,
    /// varchar
    String,
    /// Any unrecognized keyword, emitted bracketed for manual attention.
    Passthrough(String),
}

impl fmt::Display for PhinxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Decimal => write!(f, "decimal"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Date => write!(f, "date"),
            Self::DateTime => write!(f, "datetime"),
            Self::Enum => write!(f, "enum"),
            Self::Char => write!(f, "char"),
            Self::Text => write!(f, "text"),
            Self::String => write!(f, "string"),
            Self::Passthrough(keyword) => write!(f, "[{}]", keyword),
        }
    }
}

/// A column limit: either a Phinx symbolic size constant or a numeric
/// length extracted from the native type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    /// Named `MysqlAdapter` size-class constant.
    Constant(&'static str),
    /// Numeric length, kept as the digits from the native declaration.
    Length(String),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(name) => write!(f, "{}", name),
            Self::Length(digits) => write!(f, "{}", digits),
        }
    }
}

/// One `'key' => value` attribute of a Phinx `addColumn` call.
///
/// An attribute is only present when its source condition holds; "unset"
/// is signalled by omission, never by a null-ish value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnAttribute {
    /// `'null' => true`
    Null,
    /// `'default' => ...`
    Default(DefaultValue),
    /// `'update' => 'CURRENT_TIMESTAMP'`
    Update,
    /// `'limit' => ...`
    Limit(Limit),
    /// `'signed' => false`
    Signed,
    /// `'values' => array(...)`, carried verbatim from the enum declaration.
    Values(String),
}

impl fmt::Display for ColumnAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "'null' => true"),
            Self::Default(DefaultValue::Integer(value)) => write!(f, "'default' => {}", value),
            Self::Default(DefaultValue::Text(value)) => write!(f, "'default' => '{}'", value),
            Self::Update => write!(f, "'update' => 'CURRENT_TIMESTAMP'"),
            Self::Limit(limit) => write!(f, "'limit' => {}", limit),
            Self::Signed => write!(f, "'signed' => false"),
            Self::Values(values) => write!(f, "'values' => {}", values),
        }
    }
}

/// A column translated into Phinx vocabulary: the type tag plus its
/// attributes in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedColumn {
    /// Target column type tag.
    pub phinx_type: PhinxType,
    /// Attributes in the fixed order: null, default, update, limit,
    /// signed, values.
    pub attributes: Vec<ColumnAttribute>,
}

/// Pulls the base keyword from a native type, e.g. `int(10) unsigned`
/// yields `int`.
fn native_keyword(native_type: &str) -> &str {
    let end = native_type
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(native_type.len());
    &native_type[..end]
}

/// Maps a native MySQL column type to a Phinx column type.
///
/// # Example
/// ```rust
/// use phinxgen_core::codegen::{PhinxType, map_column_type};
///
/// assert_eq!(map_column_type("varchar(255)"), PhinxType::String);
/// assert_eq!(map_column_type("bigint(20)").to_string(), "[bigint]");
/// ```
pub fn map_column_type(native_type: &str) -> PhinxType {
    match native_keyword(native_type) {
        "tinyint" | "smallint" | "int" | "mediumint" => PhinxType::Integer,
        "decimal" => PhinxType::Decimal,
        "timestamp" => PhinxType::Timestamp,
        "date" => PhinxType::Date,
        "datetime" => PhinxType::DateTime,
        "enum" => PhinxType::Enum,
        "char" => PhinxType::Char,
        "text" | "tinytext" => PhinxType::Text,
        "varchar" => PhinxType::String,
        keyword => PhinxType::Passthrough(keyword.to_string()),
    }
}

/// Derives the limit attribute for a column, if any.
///
/// Integer and text subtypes with a well-known size class use the Phinx
/// `MysqlAdapter` symbolic constants; otherwise a trailing `(n)` in the
/// native type becomes a numeric limit.
fn column_limit(native_type: &str) -> Option<Limit> {
    match native_keyword(native_type) {
        "tinyint" => Some(Limit::Constant("MysqlAdapter::INT_TINY")),
        "smallint" => Some(Limit::Constant("MysqlAdapter::INT_SMALL")),
        "mediumint" => Some(Limit::Constant("MysqlAdapter::INT_MEDIUM")),
        "bigint" => Some(Limit::Constant("MysqlAdapter::INT_BIG")),
        "tinytext" => Some(Limit::Constant("MysqlAdapter::TEXT_TINY")),
        "mediumtext" => Some(Limit::Constant("MysqlAdapter::TEXT_MEDIUM")),
        "longtext" => Some(Limit::Constant("MysqlAdapter::TEXT_LONG")),
        _ => TRAILING_LIMIT
            .captures(native_type)
            .map(|captures| Limit::Length(captures[1].to_string())),
    }
}

/// Maps a column descriptor to its Phinx type and attribute list.
///
/// Attribute order is fixed and significant: null, default, update,
/// limit, signed, values. Attributes whose source condition does not hold
/// are omitted entirely.
pub fn map_column(column: &ColumnDescriptor) -> MappedColumn {
    let phinx_type = map_column_type(&column.native_type);
    let mut attributes = Vec::new();

    if column.nullable {
        attributes.push(ColumnAttribute::Null);
    }

    if let Some(default) = &column.default {
        attributes.push(ColumnAttribute::Default(default.clone()));
    }

    if column.extra == "on update CURRENT_TIMESTAMP" {
        attributes.push(ColumnAttribute::Update);
    }

    if let Some(limit) = column_limit(&column.native_type) {
        attributes.push(ColumnAttribute::Limit(limit));
    }

    if UNSIGNED.is_match(&column.native_type) {
        attributes.push(ColumnAttribute::Signed);
    }

    if phinx_type == PhinxType::Enum {
        attributes.push(ColumnAttribute::Values(
            column.native_type.replacen("enum", "array", 1),
        ));
    }

    MappedColumn {
        phinx_type,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(native_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: "value".to_string(),
            native_type: native_type.to_string(),
            nullable: false,
            default: None,
            extra: String::new(),
        }
    }

    #[test]
    fn keyword_extraction_stops_at_modifier() {
        assert_eq!(native_keyword("int(10) unsigned"), "int");
        assert_eq!(native_keyword("varchar(255)"), "varchar");
        assert_eq!(native_keyword("text"), "text");
    }

    #[test]
    fn unknown_type_passes_through_bracketed() {
        assert_eq!(map_column_type("bigint(20)").to_string(), "[bigint]");
        assert_eq!(map_column_type("geometry").to_string(), "[geometry]");
    }

    #[test]
    fn non_nullable_column_has_no_null_attribute() {
        let mapped = map_column(&plain("varchar(64)"));
        assert!(!mapped.attributes.contains(&ColumnAttribute::Null));
    }

    #[test]
    fn size_class_types_use_symbolic_constants() {
        let mapped = map_column(&plain("tinyint(1)"));
        assert_eq!(
            mapped.attributes,
            vec![ColumnAttribute::Limit(Limit::Constant(
                "MysqlAdapter::INT_TINY"
            ))]
        );
    }

    #[test]
    fn unsigned_marker_sets_signed_false() {
        let mapped = map_column(&plain("int(10) unsigned"));
        assert!(mapped.attributes.contains(&ColumnAttribute::Signed));
        // Plain int keeps the default signedness.
        let mapped = map_column(&plain("int(10)"));
        assert!(!mapped.attributes.contains(&ColumnAttribute::Signed));
    }
}
