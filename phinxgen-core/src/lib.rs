//! Core library for phinxgen: MySQL schema introspection and Phinx
//! migration code generation.
//!
//! The library splits into two halves joined by the [`SchemaReader`]
//! trait: the reader pulls raw table, column, index and foreign-key
//! metadata out of `INFORMATION_SCHEMA`, and the codegen half translates
//! it into a single up-only Phinx migration file.
//!
//! # Known limitation
//! Surrogate primary keys are assumed to be a single column literally
//! named `id`, which Phinx declares implicitly. Tables whose primary key
//! is named differently, or is composite, will have that key redeclared
//! as ordinary columns and indexes in the generated migration.

pub mod codegen;
pub mod error;
pub mod generate;
pub mod logging;
pub mod models;
pub mod reader;

// Re-export commonly used types
pub use codegen::render_migration;
pub use error::{PhinxgenError, Result};
pub use generate::{collect_tables, generate_migration};
pub use logging::init_logging;
pub use models::{
    ColumnDescriptor, DefaultValue, ForeignKeyRecord, IndexDefinition, IndexRecord, TableSpec,
};
pub use reader::{ConnectionConfig, MySqlSchemaReader, SchemaReader};
