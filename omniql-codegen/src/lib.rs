//! # OmniQL Codegen
//!
//! Go reader-interface generation from OmniQL schemas.
//!
//! This crate provides:
//! - Per-table `<Table>Reader` interface generation with one accessor per
//!   resolvable field
//! - The companion `Vector<Table>Reader` interface
//! - Import tracking and documentation comments
//! - Application-wide generation into an output directory

pub mod config;
pub mod error;
pub mod generator;
pub mod golang;

pub use config::{DEFAULT_HYBRIDS_PACKAGE, GeneratorConfig, UnresolvedPolicy};
pub use error::CodegenError;
pub use generator::{ApplicationGenerator, GeneratedFile};
pub use golang::{AccessorKind, Imports, TableReaderGenerator};

use omniql_schema::{SymbolResolver, TableDef};

/// Generates the reader interface of one table.
///
/// # Arguments
/// * `table` - Table to generate
/// * `resolver` - Resolver for the table's non-reserved type tokens
/// * `config` - Generator settings
///
/// # Errors
/// Returns `CodegenError` if resolution or rendering fails.
pub fn generate_table<R: SymbolResolver + ?Sized>(
    table: &TableDef,
    resolver: &R,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    TableReaderGenerator::new(table, resolver, config).render()
}

/// Generates the reader interfaces of every table in an XML schema string.
///
/// # Errors
/// Returns `CodegenError` if parsing, validation or generation fails.
pub fn generate_from_xml(xml: &str) -> Result<Vec<GeneratedFile>, CodegenError> {
    let application = omniql_schema::parse_application(xml)?;
    ApplicationGenerator::new(&application).generate_all()
}

/// Generates the reader interfaces of every table in an XML schema file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<Vec<GeneratedFile>, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
