//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] omniql_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] omniql_schema::SchemaError),

    /// Symbol resolution failure.
    #[error("resolution error: {0}")]
    Resolve(#[from] omniql_schema::ResolveError),

    /// Failure writing generated text into a buffer.
    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Type token that resolves to nothing, under the strict policy.
    #[error("unresolved type '{token}' in field '{table}.{field}'")]
    UnresolvedType {
        /// Table name.
        table: String,
        /// Field name.
        field: String,
        /// Type token that did not resolve.
        token: String,
    },
}
