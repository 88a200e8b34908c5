//! Symbol resolution for type tokens.
//!
//! Any field type that is not a reserved token names another schema entity.
//! A [`SymbolResolver`] maps `(application, token)` to a closed
//! [`ResolvedTypeReference`], so generators match on a fixed set of kinds
//! instead of probing strings.

use crate::error::ResolveError;
use crate::naming::entity_name;

/// Result of resolving a non-reserved type token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResolvedTypeReference {
    /// Token names a table.
    Table {
        /// Table identifier.
        id: String,
    },
    /// Token names an enumeration group.
    EnumerationGroup {
        /// Group identifier.
        id: String,
        /// Identifier of the owning enumeration.
        parent: String,
    },
    /// Token names nothing known to the resolver.
    Unresolved,
}

impl ResolvedTypeReference {
    /// Creates a table reference.
    pub fn table(id: impl Into<String>) -> Self {
        Self::Table { id: id.into() }
    }

    /// Creates an enumeration group reference.
    pub fn enumeration_group(id: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::EnumerationGroup {
            id: id.into(),
            parent: parent.into(),
        }
    }

    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> ReferenceKind {
        match self {
            Self::Table { .. } => ReferenceKind::Table,
            Self::EnumerationGroup { .. } => ReferenceKind::EnumerationGroup,
            Self::Unresolved => ReferenceKind::Unresolved,
        }
    }

    /// Identifier of the referenced entity.
    #[must_use]
    pub fn target_id(&self) -> Option<&str> {
        match self {
            Self::Table { id } | Self::EnumerationGroup { id, .. } => Some(id),
            Self::Unresolved => None,
        }
    }

    /// Identifier of the owning enumeration (groups only).
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        match self {
            Self::EnumerationGroup { parent, .. } => Some(parent),
            _ => None,
        }
    }

    /// Entity name of the target (last segment of its identifier).
    #[must_use]
    pub fn target_name(&self) -> Option<&str> {
        self.target_id().map(entity_name)
    }
}

/// Kind tag of a [`ResolvedTypeReference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// Table.
    Table,
    /// Enumeration group.
    EnumerationGroup,
    /// Unresolved.
    Unresolved,
}

impl ReferenceKind {
    /// Returns the schema name of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "Table",
            Self::EnumerationGroup => "EnumerationGroup",
            Self::Unresolved => "Unresolved",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability mapping a type token to the schema entity it names.
///
/// Implementations must be read-only and free of side effects; generators
/// for different tables may share one resolver across threads.
pub trait SymbolResolver {
    /// Resolves `token` within `application`.
    ///
    /// # Errors
    /// Returns `ResolveError` if the token is malformed or the backing
    /// registry cannot answer. A well-formed token naming nothing is not an
    /// error; it resolves to [`ResolvedTypeReference::Unresolved`].
    fn resolve(&self, application: &str, token: &str)
    -> Result<ResolvedTypeReference, ResolveError>;
}

impl<F> SymbolResolver for F
where
    F: Fn(&str, &str) -> Result<ResolvedTypeReference, ResolveError>,
{
    fn resolve(
        &self,
        application: &str,
        token: &str,
    ) -> Result<ResolvedTypeReference, ResolveError> {
        self(application, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_kind() {
        assert_eq!(
            ResolvedTypeReference::table("store/Color").kind(),
            ReferenceKind::Table
        );
        assert_eq!(
            ResolvedTypeReference::enumeration_group("store/New", "store/Condition").kind(),
            ReferenceKind::EnumerationGroup
        );
        assert_eq!(
            ResolvedTypeReference::Unresolved.kind(),
            ReferenceKind::Unresolved
        );
    }

    #[test]
    fn test_reference_ids() {
        let group = ResolvedTypeReference::enumeration_group("store/ItemCondition", "store/Condition");
        assert_eq!(group.target_id(), Some("store/ItemCondition"));
        assert_eq!(group.parent_id(), Some("store/Condition"));
        assert_eq!(group.target_name(), Some("ItemCondition"));

        let table = ResolvedTypeReference::table("Color");
        assert_eq!(table.parent_id(), None);
        assert_eq!(table.target_name(), Some("Color"));

        assert_eq!(ResolvedTypeReference::Unresolved.target_id(), None);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |_: &str, token: &str| -> Result<ResolvedTypeReference, ResolveError> {
            if token == "Color" {
                Ok(ResolvedTypeReference::table("Color"))
            } else {
                Ok(ResolvedTypeReference::Unresolved)
            }
        };

        assert_eq!(
            resolver.resolve("store", "Color"),
            Ok(ResolvedTypeReference::table("Color"))
        );
        assert_eq!(
            resolver.resolve("store", "Size"),
            Ok(ResolvedTypeReference::Unresolved)
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ReferenceKind::EnumerationGroup.to_string(), "EnumerationGroup");
    }
}
