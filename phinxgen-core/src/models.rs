//! Data structures describing an introspected MySQL schema.
//!
//! These types mirror the raw metadata rows the reader pulls out of
//! `INFORMATION_SCHEMA` and carry them, unmodified, into code generation.

/// A single column as reported by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Full native column type, e.g. `varchar(255)` or `int(10) unsigned`.
    pub native_type: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Declared default value, if any.
    pub default: Option<DefaultValue>,
    /// Free-form extra metadata, e.g. `on update CURRENT_TIMESTAMP`.
    pub extra: String,
}

/// A column default value.
///
/// Integer defaults render as bare literals; everything else, including
/// the literal string `CURRENT_TIMESTAMP`, renders quoted. MySQL reports
/// `COLUMN_DEFAULT` as a string, so the reader only ever produces
/// [`DefaultValue::Text`]; [`DefaultValue::Integer`] exists for callers
/// that build descriptors directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Numeric default, emitted unquoted.
    Integer(i64),
    /// Textual default, emitted single-quoted.
    Text(String),
}

/// One raw index row, one per column-in-index, as returned by
/// `INFORMATION_SCHEMA.STATISTICS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    /// Index (key) name; multi-column indexes repeat it across rows.
    pub index_name: String,
    /// Name of the column this row covers.
    pub column_name: String,
    /// True when the raw non-unique flag is 0.
    pub is_unique: bool,
    /// True when the raw index type is `FULLTEXT`.
    pub is_fulltext: bool,
}

/// A named index assembled from its raw per-column rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDefinition {
    /// Original index name.
    pub name: String,
    /// Covered columns in first-seen row order.
    pub columns: Vec<String>,
    /// Whether the index enforces uniqueness.
    pub unique: bool,
    /// Whether this is a FULLTEXT index.
    pub fulltext: bool,
}

/// A single-column foreign key relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRecord {
    /// Constrained column on the owning table.
    pub column_name: String,
    /// Table the constraint points at.
    pub referenced_table: String,
    /// Column the constraint points at.
    pub referenced_column: String,
    /// Raw `UPDATE_RULE`, e.g. `NO ACTION`.
    pub update_rule: String,
    /// Raw `DELETE_RULE`, e.g. `CASCADE`.
    pub delete_rule: String,
}

/// Everything known about one table, in the order the database reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    /// Table name.
    pub name: String,
    /// Columns in ordinal order.
    pub columns: Vec<ColumnDescriptor>,
    /// Grouped index definitions in first-seen order.
    pub indexes: Vec<IndexDefinition>,
    /// Foreign key relations, one record per constrained column.
    pub foreign_keys: Vec<ForeignKeyRecord>,
}
