//! Schema validation utilities.
//!
//! Validation here is structural only: names must render as identifiers,
//! definitions must be unique and vector fields must name their element
//! type. Whether a type token resolves is left to the generators.

use crate::application::Application;
use crate::error::SchemaError;
use crate::naming::{capitalize, is_valid_identifier};
use crate::tables::TableDef;
use crate::types::is_reserved_token;
use std::collections::HashSet;

/// Validates a loaded application for correctness.
///
/// # Arguments
/// * `application` - The application to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_application(application: &Application) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for table in &application.tables {
        if is_reserved_token(&table.name) {
            return Err(SchemaError::invalid_identifier("table", &table.name));
        }
        if !seen.insert(table.name.as_str()) {
            return Err(SchemaError::duplicate("table", &table.name));
        }
        validate_table(table)?;
    }

    for enumeration in &application.enumerations {
        if !is_valid_identifier(&enumeration.name) {
            return Err(SchemaError::invalid_identifier(
                "enumeration",
                &enumeration.name,
            ));
        }
        if !seen.insert(enumeration.name.as_str()) {
            return Err(SchemaError::duplicate("enumeration", &enumeration.name));
        }
    }

    // Groups share the token namespace with tables and enumerations.
    for group in application.enumerations.iter().flat_map(|e| &e.groups) {
        if !is_valid_identifier(&group.name) || is_reserved_token(&group.name) {
            return Err(SchemaError::invalid_identifier("group", &group.name));
        }
        if !seen.insert(group.name.as_str()) {
            return Err(SchemaError::duplicate("group", &group.name));
        }
    }

    Ok(())
}

/// Validates a single table definition.
///
/// # Errors
/// Returns `SchemaError` if the table or one of its fields is invalid.
pub fn validate_table(table: &TableDef) -> Result<(), SchemaError> {
    if !is_valid_identifier(&table.name) {
        return Err(SchemaError::invalid_identifier("table", &table.name));
    }

    // Two fields whose names only differ in the first letter's case would
    // produce the same accessor.
    let mut accessors = HashSet::new();

    for field in &table.fields {
        if !is_valid_identifier(&field.name) {
            return Err(SchemaError::invalid_identifier("field", &field.name));
        }
        if !accessors.insert(capitalize(&field.name)) {
            return Err(SchemaError::duplicate(
                "field",
                format!("{}.{}", table.name, field.name),
            ));
        }
        if field.is_vector() && field.items_token().is_none() {
            return Err(SchemaError::MissingItems {
                table: table.name.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}
