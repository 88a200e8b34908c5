//! Table definitions for OmniQL schemas.
//!
//! A table is an ordered set of named, typed fields. Field order is the
//! declaration order and the order in which accessors are generated.

use crate::types::{Documentation, STRING_TOKEN, VECTOR_TOKEN};

/// Table definition.
#[derive(Debug, Clone)]
pub struct TableDef {
    /// Table name, unique within its application.
    pub name: String,
    /// Owning application (namespace).
    pub application: String,
    /// Documentation.
    pub documentation: Option<Documentation>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl TableDef {
    /// Creates a new table definition.
    #[must_use]
    pub fn new(name: impl Into<String>, application: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            application: application.into(),
            documentation: None,
            fields: Vec::new(),
        }
    }

    /// Sets the table documentation.
    #[must_use]
    pub fn with_documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = Some(documentation);
        self
    }

    /// Appends a field and returns the table, for chained construction.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a field to the table.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Field definition within a table.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Raw type token: `String`, `Vector`, or the name of another entity.
    pub type_name: String,
    /// Element type token, meaningful only for vector fields.
    pub items: Option<String>,
    /// Documentation.
    pub documentation: Option<Documentation>,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            items: None,
            documentation: None,
        }
    }

    /// Creates a scalar string field.
    #[must_use]
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, STRING_TOKEN)
    }

    /// Creates a vector field with the given element type token.
    #[must_use]
    pub fn vector(name: impl Into<String>, items: impl Into<String>) -> Self {
        let mut field = Self::new(name, VECTOR_TOKEN);
        field.items = Some(items.into());
        field
    }

    /// Sets the field documentation.
    #[must_use]
    pub fn with_documentation(mut self, documentation: Documentation) -> Self {
        self.documentation = Some(documentation);
        self
    }

    /// Returns true if this is a vector field.
    #[must_use]
    pub fn is_vector(&self) -> bool {
        self.type_name == VECTOR_TOKEN
    }

    /// Element type token, treating an empty string as absent.
    #[must_use]
    pub fn items_token(&self) -> Option<&str> {
        self.items.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_keeps_field_order() {
        let table = TableDef::new("Item", "store")
            .with_field(FieldDef::string("SKU"))
            .with_field(FieldDef::new("Condition", "Color"))
            .with_field(FieldDef::vector("Tags", "String"));

        let names: Vec<&str> = table.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["SKU", "Condition", "Tags"]);
        assert_eq!(table.application, "store");
    }

    #[test]
    fn test_vector_field() {
        let field = FieldDef::vector("Tags", "String");
        assert!(field.is_vector());
        assert_eq!(field.items_token(), Some("String"));
    }

    #[test]
    fn test_empty_items_is_absent() {
        let mut field = FieldDef::new("Tags", "Vector");
        field.items = Some(String::new());
        assert_eq!(field.items_token(), None);
    }

    #[test]
    fn test_get_field() {
        let table = TableDef::new("Item", "store").with_field(FieldDef::string("SKU"));
        assert!(table.get_field("SKU").is_some());
        assert!(table.get_field("sku").is_none());
    }
}
