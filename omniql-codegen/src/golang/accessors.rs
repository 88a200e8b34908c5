//! Accessor selection and rendering.
//!
//! Each field maps to at most one accessor method. Reserved tokens are
//! matched first; any other token is resolved against the table's
//! application and the result decides the accessor shape.

use crate::config::GeneratorConfig;
use crate::golang::docs::go_doc;
use omniql_schema::naming::{capitalize, entity_name, reader_name, vector_reader_name};
use omniql_schema::{
    FieldDef, ResolveError, ResolvedTypeReference, STRING_TOKEN, SymbolResolver, VECTOR_TOKEN,
};

/// Shape of a generated accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessorKind {
    /// `Name() string`
    String,
    /// `Name() hybrids.VectorStringReader`
    VectorString,
    /// `Name() Vector<Table>Reader`
    VectorTable {
        /// Element table name.
        table: String,
    },
    /// `Name() (<Table>Reader, error)`
    Table {
        /// Referenced table name.
        table: String,
    },
    /// `Name() <Enumeration>`
    Enumeration {
        /// Owning enumeration name.
        enumeration: String,
    },
}

impl AccessorKind {
    /// Go return type of the accessor.
    #[must_use]
    pub fn return_type(&self, config: &GeneratorConfig) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::VectorString => format!("{}.VectorStringReader", config.hybrids_alias()),
            Self::VectorTable { table } => vector_reader_name(table),
            Self::Table { table } => format!("({}, error)", reader_name(table)),
            Self::Enumeration { enumeration } => capitalize(enumeration),
        }
    }

    /// Returns true if the accessor can fail. Only table references can.
    #[must_use]
    pub const fn has_error_channel(&self) -> bool {
        matches!(self, Self::Table { .. })
    }

    /// Import path this accessor needs, if any.
    #[must_use]
    pub fn required_import<'c>(&self, config: &'c GeneratorConfig) -> Option<&'c str> {
        match self {
            Self::VectorString => Some(&config.hybrids_package),
            _ => None,
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::VectorString => "vector-string",
            Self::VectorTable { .. } => "vector-table",
            Self::Table { .. } => "table",
            Self::Enumeration { .. } => "enumeration",
        }
    }
}

/// Decides which accessor a field gets.
///
/// Returns `Ok(None)` when the field's type does not resolve to anything an
/// accessor can be produced for.
///
/// # Errors
/// Returns `ResolveError` if the resolver fails.
pub fn classify_field<R: SymbolResolver + ?Sized>(
    application: &str,
    field: &FieldDef,
    resolver: &R,
) -> Result<Option<AccessorKind>, ResolveError> {
    match field.type_name.as_str() {
        STRING_TOKEN => Ok(Some(AccessorKind::String)),
        VECTOR_TOKEN => match field.items_token() {
            Some(STRING_TOKEN) => Ok(Some(AccessorKind::VectorString)),
            Some(items) => match resolver.resolve(application, items)? {
                ResolvedTypeReference::Table { id } => Ok(Some(AccessorKind::VectorTable {
                    table: entity_name(&id).to_string(),
                })),
                _ => Ok(None),
            },
            None => Ok(None),
        },
        token => match resolver.resolve(application, token)? {
            ResolvedTypeReference::Table { id } => Ok(Some(AccessorKind::Table {
                table: entity_name(&id).to_string(),
            })),
            ResolvedTypeReference::EnumerationGroup { parent, .. } => {
                Ok(Some(AccessorKind::Enumeration {
                    enumeration: entity_name(&parent).to_string(),
                }))
            }
            ResolvedTypeReference::Unresolved => Ok(None),
        },
    }
}

/// Type token that was resolved for a field: `items` for vectors.
#[must_use]
pub fn resolved_token(field: &FieldDef) -> &str {
    if field.is_vector() {
        field.items_token().unwrap_or_default()
    } else {
        &field.type_name
    }
}

/// Renders the doc comment and method signature of one accessor.
#[must_use]
pub fn render_accessor(field: &FieldDef, kind: &AccessorKind, config: &GeneratorConfig) -> String {
    let mut out = go_doc(&field.name, field.documentation.as_ref(), "\t");
    out.push_str(&format!(
        "\t{}() {}\n",
        capitalize(&field.name),
        kind.return_type(config)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use omniql_schema::{Documentation, ResolvedTypeReference};

    fn resolver(
        _application: &str,
        token: &str,
    ) -> Result<ResolvedTypeReference, ResolveError> {
        match token {
            "Color" => Ok(ResolvedTypeReference::table("store/Color")),
            "ItemCondition" => Ok(ResolvedTypeReference::enumeration_group(
                "store/ItemCondition",
                "store/Condition",
            )),
            "Broken" => Err(ResolveError::Unavailable {
                message: "registry offline".to_string(),
            }),
            _ => Ok(ResolvedTypeReference::Unresolved),
        }
    }

    fn classify(field: &FieldDef) -> Option<AccessorKind> {
        classify_field("store", field, &resolver).expect("classify")
    }

    #[test]
    fn test_classify_string() {
        assert_eq!(classify(&FieldDef::string("SKU")), Some(AccessorKind::String));
    }

    #[test]
    fn test_classify_vector_string() {
        assert_eq!(
            classify(&FieldDef::vector("Tags", "String")),
            Some(AccessorKind::VectorString)
        );
    }

    #[test]
    fn test_classify_vector_table() {
        assert_eq!(
            classify(&FieldDef::vector("Colors", "Color")),
            Some(AccessorKind::VectorTable {
                table: "Color".to_string()
            })
        );
    }

    #[test]
    fn test_classify_vector_of_enumeration_is_skipped() {
        assert_eq!(classify(&FieldDef::vector("Conditions", "ItemCondition")), None);
    }

    #[test]
    fn test_classify_vector_without_items_is_skipped() {
        assert_eq!(classify(&FieldDef::new("Tags", "Vector")), None);
    }

    #[test]
    fn test_classify_table_reference() {
        assert_eq!(
            classify(&FieldDef::new("Condition", "Color")),
            Some(AccessorKind::Table {
                table: "Color".to_string()
            })
        );
    }

    #[test]
    fn test_classify_enumeration_group() {
        assert_eq!(
            classify(&FieldDef::new("Condition", "ItemCondition")),
            Some(AccessorKind::Enumeration {
                enumeration: "Condition".to_string()
            })
        );
    }

    #[test]
    fn test_classify_unresolved() {
        assert_eq!(classify(&FieldDef::new("Size", "Size")), None);
    }

    #[test]
    fn test_classify_propagates_resolver_error() {
        let err = classify_field("store", &FieldDef::new("Link", "Broken"), &resolver).unwrap_err();
        assert!(matches!(err, ResolveError::Unavailable { .. }));
    }

    #[test]
    fn test_return_types() {
        let config = GeneratorConfig::default();
        assert_eq!(AccessorKind::String.return_type(&config), "string");
        assert_eq!(
            AccessorKind::VectorString.return_type(&config),
            "hybrids.VectorStringReader"
        );
        assert_eq!(
            AccessorKind::VectorTable {
                table: "Color".to_string()
            }
            .return_type(&config),
            "VectorColorReader"
        );
        assert_eq!(
            AccessorKind::Table {
                table: "Color".to_string()
            }
            .return_type(&config),
            "(ColorReader, error)"
        );
        assert_eq!(
            AccessorKind::Enumeration {
                enumeration: "Condition".to_string()
            }
            .return_type(&config),
            "Condition"
        );
    }

    #[test]
    fn test_only_table_reference_has_error_channel() {
        assert!(
            AccessorKind::Table {
                table: "Color".to_string()
            }
            .has_error_channel()
        );
        assert!(!AccessorKind::String.has_error_channel());
        assert!(!AccessorKind::VectorString.has_error_channel());
    }

    #[test]
    fn test_required_import() {
        let config = GeneratorConfig::default();
        assert_eq!(
            AccessorKind::VectorString.required_import(&config),
            Some("github.com/nebtex/hybrids/golang/hybrids")
        );
        assert_eq!(AccessorKind::String.required_import(&config), None);
    }

    #[test]
    fn test_resolved_token() {
        assert_eq!(resolved_token(&FieldDef::vector("Colors", "Color")), "Color");
        assert_eq!(resolved_token(&FieldDef::new("Size", "Size")), "Size");
    }

    #[test]
    fn test_render_accessor() {
        let config = GeneratorConfig::default();
        let field = FieldDef::string("sku").with_documentation(Documentation::short("is the code."));
        assert_eq!(
            render_accessor(&field, &AccessorKind::String, &config),
            "\t// Sku is the code.\n\tSku() string\n"
        );
    }
}
