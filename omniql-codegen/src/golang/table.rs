//! Table reader interface generation.
//!
//! [`TableReaderGenerator`] assembles the Go file for one table. Output is
//! accumulated in three buffers (imports, interface definitions, auxiliary
//! interfaces) and composed in that order only once the whole pass has
//! succeeded, so a failed pass never reaches the sink.

use crate::config::{GeneratorConfig, UnresolvedPolicy};
use crate::error::CodegenError;
use crate::golang::accessors::{AccessorKind, classify_field, render_accessor, resolved_token};
use crate::golang::docs::go_doc;
use crate::golang::imports::Imports;
use crate::golang::vector::render_vector_reader;
use omniql_schema::naming::reader_name;
use omniql_schema::{FieldDef, SymbolResolver, TableDef};
use std::fmt::Write as _;

/// Generator for the reader interface of a single table.
///
/// A generator is used for exactly one pass; [`render`](Self::render) and
/// [`generate`](Self::generate) consume it.
pub struct TableReaderGenerator<'a, R: ?Sized> {
    table: &'a TableDef,
    resolver: &'a R,
    config: &'a GeneratorConfig,
    imports: Imports,
    definitions: String,
    functions: String,
    accessors: usize,
}

impl<'a, R: SymbolResolver + ?Sized> TableReaderGenerator<'a, R> {
    /// Creates a new table reader generator.
    #[must_use]
    pub fn new(table: &'a TableDef, resolver: &'a R, config: &'a GeneratorConfig) -> Self {
        Self {
            table,
            resolver,
            config,
            imports: Imports::new(),
            definitions: String::new(),
            functions: String::new(),
            accessors: 0,
        }
    }

    /// Table this generator works on.
    #[must_use]
    pub fn table(&self) -> &'a TableDef {
        self.table
    }

    /// Runs the pass and writes the artifact to `wr`.
    ///
    /// # Errors
    /// Returns `CodegenError` if resolution, rendering or the final write
    /// fails. Nothing is written unless the pass completed.
    pub fn generate<W: std::io::Write>(self, wr: &mut W) -> Result<(), CodegenError> {
        let output = self.render()?;
        wr.write_all(output.as_bytes())?;
        Ok(())
    }

    /// Runs the pass and returns the artifact.
    ///
    /// # Errors
    /// Returns `CodegenError` on the first resolution or rendering failure.
    pub fn render(mut self) -> Result<String, CodegenError> {
        let span = tracing::info_span!(
            "reader_interface",
            table = %self.table.name,
            application = %self.table.application,
            kind = "reader interface"
        );
        let _enter = span.enter();
        let interface = reader_name(&self.table.name);

        match self.run() {
            Ok(output) => {
                tracing::info!(
                    "Interface for table {} created successfully ({} accessors)",
                    interface,
                    self.accessors
                );
                Ok(output)
            }
            Err(e) => {
                tracing::error!("Interface for table {} failed: {}", interface, e);
                Err(e)
            }
        }
    }

    fn run(&mut self) -> Result<String, CodegenError> {
        self.start_interface()?;
        self.create_accessors()?;
        self.create_vector()?;
        self.end_interface()?;
        self.flush_buffers()
    }

    fn start_interface(&mut self) -> Result<(), CodegenError> {
        let name = reader_name(&self.table.name);
        let doc = go_doc(&name, self.table.documentation.as_ref(), "");
        writeln!(self.definitions, "{}type {} interface {{", doc, name)?;
        Ok(())
    }

    fn create_accessors(&mut self) -> Result<(), CodegenError> {
        let table = self.table;
        for field in &table.fields {
            self.add_accessor(field)?;
        }
        Ok(())
    }

    /// Emits the accessor for one field, returning its shape if one was
    /// produced.
    fn add_accessor(&mut self, field: &FieldDef) -> Result<Option<AccessorKind>, CodegenError> {
        let Some(kind) = classify_field(&self.table.application, field, self.resolver)? else {
            self.unresolved(field)?;
            return Ok(None);
        };

        if let Some(path) = kind.required_import(self.config) {
            self.imports.add_import(path);
        }
        if self.accessors > 0 {
            self.definitions.push('\n');
        }
        self.definitions
            .write_str(&render_accessor(field, &kind, self.config))?;
        self.accessors += 1;

        tracing::debug!(field = %field.name, accessor = kind.label(), "accessor emitted");
        Ok(Some(kind))
    }

    fn unresolved(&self, field: &FieldDef) -> Result<(), CodegenError> {
        let token = resolved_token(field);
        match self.config.unresolved_policy {
            UnresolvedPolicy::Skip => {
                tracing::debug!(field = %field.name, token, "unresolved field type skipped");
                Ok(())
            }
            UnresolvedPolicy::Strict => Err(CodegenError::UnresolvedType {
                table: self.table.name.clone(),
                field: field.name.clone(),
                token: token.to_string(),
            }),
        }
    }

    fn create_vector(&mut self) -> Result<(), CodegenError> {
        self.functions
            .write_str(&render_vector_reader(&self.table.name))?;
        Ok(())
    }

    fn end_interface(&mut self) -> Result<(), CodegenError> {
        self.definitions.write_str("}\n")?;
        Ok(())
    }

    /// Composes imports, definitions and auxiliary interfaces, in that order.
    fn flush_buffers(&self) -> Result<String, CodegenError> {
        let mut output =
            String::with_capacity(self.definitions.len() + self.functions.len() + 128);
        self.imports.write_to(&mut output)?;
        output.push_str(&self.definitions);
        output.push_str(&self.functions);
        Ok(output)
    }
}
