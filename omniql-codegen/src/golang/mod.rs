//! Go code generation modules.

pub mod accessors;
pub mod docs;
pub mod imports;
pub mod table;
pub mod vector;

pub use accessors::{AccessorKind, classify_field, render_accessor};
pub use docs::go_doc;
pub use imports::Imports;
pub use table::TableReaderGenerator;
pub use vector::render_vector_reader;
