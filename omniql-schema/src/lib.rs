//! # OmniQL Schema
//!
//! Schema model and symbol resolution for OmniQL applications.
//!
//! This crate provides:
//! - Table, field, documentation and enumeration definitions
//! - An in-memory [`Application`] registry
//! - The [`SymbolResolver`] capability and its [`ResolvedTypeReference`] result
//! - XML schema loading and structural validation
//! - Naming policy shared by the code generators

pub mod application;
pub mod error;
pub mod naming;
pub mod parser;
pub mod resolver;
pub mod tables;
pub mod types;
pub mod validation;

pub use application::Application;
pub use error::{ParseError, ResolveError, SchemaError};
pub use parser::parse_application;
pub use resolver::{ReferenceKind, ResolvedTypeReference, SymbolResolver};
pub use tables::{FieldDef, TableDef};
pub use types::{Documentation, EnumerationDef, EnumerationGroupDef, STRING_TOKEN, VECTOR_TOKEN};
pub use validation::{validate_application, validate_table};
