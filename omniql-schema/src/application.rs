//! In-memory application registry.
//!
//! An [`Application`] owns the tables and enumerations of one namespace,
//! enumerates tables in declaration order and resolves type tokens for the
//! generators.

use crate::error::ResolveError;
use crate::resolver::{ResolvedTypeReference, SymbolResolver};
use crate::tables::TableDef;
use crate::types::{Documentation, EnumerationDef};
use std::collections::HashMap;

/// Complete OmniQL application definition.
#[derive(Debug, Clone)]
pub struct Application {
    /// Application name (namespace).
    pub name: String,
    /// Documentation.
    pub documentation: Option<Documentation>,
    /// Tables in declaration order.
    pub tables: Vec<TableDef>,
    /// Enumerations in declaration order.
    pub enumerations: Vec<EnumerationDef>,
    table_map: HashMap<String, usize>,
    group_map: HashMap<String, (usize, usize)>,
}

impl Application {
    /// Creates a new empty application.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            tables: Vec::new(),
            enumerations: Vec::new(),
            table_map: HashMap::new(),
            group_map: HashMap::new(),
        }
    }

    /// Adds a table, rebinding it to this application.
    pub fn add_table(&mut self, mut table: TableDef) {
        table.application.clone_from(&self.name);
        self.table_map.insert(table.name.clone(), self.tables.len());
        self.tables.push(table);
    }

    /// Adds an enumeration and indexes its groups.
    pub fn add_enumeration(&mut self, enumeration: EnumerationDef) {
        let index = self.enumerations.len();
        for (group_index, group) in enumeration.groups.iter().enumerate() {
            self.group_map
                .insert(group.name.clone(), (index, group_index));
        }
        self.enumerations.push(enumeration);
    }

    /// Looks up a table by name.
    #[must_use]
    pub fn get_table(&self, name: &str) -> Option<&TableDef> {
        self.table_map.get(name).map(|&i| &self.tables[i])
    }

    /// Looks up an enumeration by name.
    #[must_use]
    pub fn get_enumeration(&self, name: &str) -> Option<&EnumerationDef> {
        self.enumerations.iter().find(|e| e.name == name)
    }

    /// Returns the number of tables.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Identifier of an entity in this application.
    #[must_use]
    pub fn entity_id(&self, name: &str) -> String {
        format!("{}/{}", self.name, name)
    }
}

impl SymbolResolver for Application {
    fn resolve(
        &self,
        application: &str,
        token: &str,
    ) -> Result<ResolvedTypeReference, ResolveError> {
        if application != self.name {
            return Err(ResolveError::UnknownApplication {
                application: application.to_string(),
            });
        }
        if token.is_empty() || token.contains('/') || token.chars().any(char::is_whitespace) {
            return Err(ResolveError::malformed(token));
        }

        if self.table_map.contains_key(token) {
            return Ok(ResolvedTypeReference::table(self.entity_id(token)));
        }

        if let Some(&(enum_index, _)) = self.group_map.get(token) {
            let parent = &self.enumerations[enum_index].name;
            return Ok(ResolvedTypeReference::enumeration_group(
                self.entity_id(token),
                self.entity_id(parent),
            ));
        }

        Ok(ResolvedTypeReference::Unresolved)
    }
}
