//! Shared schema type definitions.
//!
//! This module contains the reserved type tokens, documentation blocks and
//! enumeration definitions referenced by table fields.

/// Reserved token for scalar string fields.
pub const STRING_TOKEN: &str = "String";

/// Reserved token for vector fields; the element type lives in `items`.
pub const VECTOR_TOKEN: &str = "Vector";

/// Returns true if `token` is one of the reserved scalar/container tokens.
#[must_use]
pub fn is_reserved_token(token: &str) -> bool {
    token == STRING_TOKEN || token == VECTOR_TOKEN
}

/// Short/long documentation pair attached to tables, fields and enumerations.
///
/// Empty or whitespace-only text counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
    short: Option<String>,
    long: Option<String>,
}

impl Documentation {
    /// Creates documentation from optional short and long text.
    #[must_use]
    pub fn new(short: Option<String>, long: Option<String>) -> Self {
        Self {
            short: short.filter(|s| !s.trim().is_empty()),
            long: long.filter(|s| !s.trim().is_empty()),
        }
    }

    /// Creates documentation with only a short description.
    #[must_use]
    pub fn short(text: impl Into<String>) -> Self {
        Self::new(Some(text.into()), None)
    }

    /// Creates documentation with both descriptions.
    #[must_use]
    pub fn full(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self::new(Some(short.into()), Some(long.into()))
    }

    /// Short description, if any.
    #[must_use]
    pub fn short_text(&self) -> Option<&str> {
        self.short.as_deref()
    }

    /// Long description, if any.
    #[must_use]
    pub fn long_text(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// Returns true if neither description is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }
}

/// Enumeration definition.
///
/// Fields never name an enumeration directly; they name one of its groups,
/// and the generated accessor returns the enumeration type.
#[derive(Debug, Clone)]
pub struct EnumerationDef {
    /// Enumeration name.
    pub name: String,
    /// Documentation.
    pub documentation: Option<Documentation>,
    /// Groups of items.
    pub groups: Vec<EnumerationGroupDef>,
}

impl EnumerationDef {
    /// Creates a new empty enumeration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            groups: Vec::new(),
        }
    }

    /// Adds a group to the enumeration.
    pub fn add_group(&mut self, group: EnumerationGroupDef) {
        self.groups.push(group);
    }

    /// Looks up a group by name.
    #[must_use]
    pub fn get_group(&self, name: &str) -> Option<&EnumerationGroupDef> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// Named group of enumeration items.
#[derive(Debug, Clone)]
pub struct EnumerationGroupDef {
    /// Group name.
    pub name: String,
    /// Documentation.
    pub documentation: Option<Documentation>,
    /// Item names in declaration order.
    pub items: Vec<String>,
}

impl EnumerationGroupDef {
    /// Creates a new empty group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            documentation: None,
            items: Vec::new(),
        }
    }

    /// Adds an item to the group.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_blank_is_absent() {
        let doc = Documentation::new(Some("  ".to_string()), Some(String::new()));
        assert!(doc.is_empty());
        assert_eq!(doc.short_text(), None);
    }

    #[test]
    fn test_documentation_full() {
        let doc = Documentation::full("short", "long");
        assert_eq!(doc.short_text(), Some("short"));
        assert_eq!(doc.long_text(), Some("long"));
        assert!(!doc.is_empty());
    }

    #[test]
    fn test_reserved_tokens() {
        assert!(is_reserved_token("String"));
        assert!(is_reserved_token("Vector"));
        assert!(!is_reserved_token("string"));
        assert!(!is_reserved_token("Color"));
    }

    #[test]
    fn test_enumeration_groups() {
        let mut group = EnumerationGroupDef::new("ItemCondition");
        group.add_item("New");
        group.add_item("Used");

        let mut enumeration = EnumerationDef::new("Condition");
        enumeration.add_group(group);

        let found = enumeration.get_group("ItemCondition").expect("group");
        assert_eq!(found.items, vec!["New", "Used"]);
        assert!(enumeration.get_group("Missing").is_none());
    }
}
