//! Error types for schema loading, validation and symbol resolution.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Table not found.
    #[error("table '{name}' not found")]
    TableNotFound {
        /// Table name.
        name: String,
    },

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (table, field, enumeration, group).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Name that cannot be rendered as an identifier.
    #[error("invalid {kind} identifier '{name}'")]
    InvalidIdentifier {
        /// Kind of definition carrying the name.
        kind: String,
        /// Offending name.
        name: String,
    },

    /// Vector field without an element type.
    #[error("vector field '{field}' in table '{table}' has no items type")]
    MissingItems {
        /// Table name.
        table: String,
        /// Field name.
        field: String,
    },
}

/// Error returned by a [`SymbolResolver`](crate::SymbolResolver).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Token that cannot name any schema entity.
    #[error("malformed type token '{token}'")]
    MalformedToken {
        /// Offending token.
        token: String,
    },

    /// Application not served by this resolver.
    #[error("unknown application '{application}'")]
    UnknownApplication {
        /// Requested application.
        application: String,
    },

    /// Backing registry could not answer.
    #[error("symbol registry unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid identifier error.
    pub fn invalid_identifier(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl ResolveError {
    /// Creates a malformed token error.
    pub fn malformed(token: impl Into<String>) -> Self {
        Self::MalformedToken {
            token: token.into(),
        }
    }
}
