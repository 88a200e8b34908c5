//! # OmniQL
//!
//! Schema-driven reader interface generation.
//!
//! Given an application schema (tables of ordered, typed fields), OmniQL
//! emits a read-only Go interface per table plus a `Vector<Table>Reader`
//! companion, and ships the runtime contract those vector readers follow.
//!
//! ## Quick Start
//!
//! ```
//! use omniql::prelude::*;
//!
//! let mut app = Application::new("store");
//! app.add_table(TableDef::new("Color", "store").with_field(FieldDef::string("Code")));
//! app.add_table(
//!     TableDef::new("Item", "store")
//!         .with_field(FieldDef::string("SKU"))
//!         .with_field(FieldDef::new("Condition", "Color")),
//! );
//!
//! let output = ApplicationGenerator::new(&app).generate_table("Item")?;
//! assert!(output.contains("Condition() (ColorReader, error)"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Runtime vector reader contract
//! - [`schema`] - Schema model, XML loading, validation, symbol resolution
//! - [`codegen`] - Go reader interface generation

pub mod prelude;

/// Runtime reader contracts.
pub mod core {
    pub use omniql_core::*;
}

/// Schema model and symbol resolution.
pub mod schema {
    pub use omniql_schema::*;
}

/// Reader interface generation.
pub mod codegen {
    pub use omniql_codegen::*;
}
