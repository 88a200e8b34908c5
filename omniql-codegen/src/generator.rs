//! Application-wide code generation.
//!
//! [`ApplicationGenerator`] walks every table of an [`Application`] in
//! declaration order and produces one Go file per table. Each table gets its
//! own [`TableReaderGenerator`]; nothing is shared between passes except the
//! read-only application and configuration.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::golang::TableReaderGenerator;
use omniql_schema::naming::to_snake_case;
use omniql_schema::{Application, SchemaError, TableDef, validate_application};
use std::path::{Path, PathBuf};

/// One generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Table the file was generated from.
    pub table: String,
    /// File name, relative to the output directory.
    pub file_name: String,
    /// Generated source text.
    pub contents: String,
}

/// Generator for all tables of an application.
pub struct ApplicationGenerator<'a> {
    application: &'a Application,
    config: GeneratorConfig,
}

impl<'a> ApplicationGenerator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(application: &'a Application) -> Self {
        Self::with_config(application, GeneratorConfig::default())
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(application: &'a Application, config: GeneratorConfig) -> Self {
        Self {
            application,
            config,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the reader interfaces of every table.
    ///
    /// # Errors
    /// Returns `CodegenError` if the application fails validation or any
    /// table pass fails. No files are returned on error.
    pub fn generate_all(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        validate_application(self.application)?;

        let files = self
            .application
            .tables
            .iter()
            .map(|table| self.generate_file(table))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            "Generated {} reader interfaces for application {}",
            files.len(),
            self.application.name
        );
        Ok(files)
    }

    /// Generates the reader interface of a single table by name.
    ///
    /// # Errors
    /// Returns `CodegenError` if the table does not exist or its pass fails.
    pub fn generate_table(&self, name: &str) -> Result<String, CodegenError> {
        let table = self
            .application
            .get_table(name)
            .ok_or_else(|| SchemaError::TableNotFound {
                name: name.to_string(),
            })?;
        TableReaderGenerator::new(table, self.application, &self.config).render()
    }

    /// Generates every table and writes the files into `dir`.
    ///
    /// Nothing is written if any table fails to generate.
    ///
    /// # Errors
    /// Returns `CodegenError` on generation or IO failure.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>, CodegenError> {
        let files = self.generate_all()?;
        std::fs::create_dir_all(dir)?;

        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let path = dir.join(&file.file_name);
            std::fs::write(&path, file.contents)?;
            tracing::debug!(path = %path.display(), "wrote reader interface");
            written.push(path);
        }
        Ok(written)
    }

    /// File name of a table's generated interface.
    #[must_use]
    pub fn file_name(&self, table: &TableDef) -> String {
        format!(
            "{}_reader.{}",
            to_snake_case(&table.name),
            self.config.file_extension
        )
    }

    /// Renders one table as a standalone Go file: the package clause
    /// followed by the reader interfaces.
    fn generate_file(&self, table: &TableDef) -> Result<GeneratedFile, CodegenError> {
        let body = TableReaderGenerator::new(table, self.application, &self.config).render()?;
        let package = self.config.package_name(&self.application.name);
        let contents = format!("package {}\n\n{}", package, body);
        Ok(GeneratedFile {
            table: table.name.clone(),
            file_name: self.file_name(table),
            contents,
        })
    }
}
