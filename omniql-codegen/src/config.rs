//! Generator configuration.

/// Go package providing the shared vector primitives.
pub const DEFAULT_HYBRIDS_PACKAGE: &str = "github.com/nebtex/hybrids/golang/hybrids";

/// What to do with a field whose type token resolves to nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnresolvedPolicy {
    /// Omit the accessor and keep going.
    #[default]
    Skip,
    /// Abort the pass with [`CodegenError::UnresolvedType`](crate::CodegenError::UnresolvedType).
    Strict,
}

/// Settings shared by every generator in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Import path of the vector primitives package.
    pub hybrids_package: String,
    /// Handling of unresolved field types.
    pub unresolved_policy: UnresolvedPolicy,
    /// Extension of generated files, without the dot.
    pub file_extension: String,
    /// Import path of the package the generated files belong to. When unset
    /// the package is named after the application.
    pub interface_package: Option<String>,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hybrids_package: DEFAULT_HYBRIDS_PACKAGE.to_string(),
            unresolved_policy: UnresolvedPolicy::Skip,
            file_extension: "go".to_string(),
            interface_package: None,
        }
    }

    /// Sets the vector primitives package.
    #[must_use]
    pub fn with_hybrids_package(mut self, package: impl Into<String>) -> Self {
        self.hybrids_package = package.into();
        self
    }

    /// Sets the unresolved type policy.
    #[must_use]
    pub fn with_unresolved_policy(mut self, policy: UnresolvedPolicy) -> Self {
        self.unresolved_policy = policy;
        self
    }

    /// Sets the generated file extension.
    #[must_use]
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    /// Sets the package the generated files belong to.
    #[must_use]
    pub fn with_interface_package(mut self, package: impl Into<String>) -> Self {
        self.interface_package = Some(package.into());
        self
    }

    /// Go package name for the files of `application`.
    ///
    /// Uses the last segment of the interface package, or the application
    /// name. Either is lowercased and characters Go does not allow in a
    /// package name become `_`.
    #[must_use]
    pub fn package_name(&self, application: &str) -> String {
        let source = self
            .interface_package
            .as_deref()
            .and_then(|path| path.rsplit('/').next())
            .unwrap_or(application);

        let mut name: String = source
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        if !name.starts_with(|c: char| c.is_alphabetic() || c == '_') {
            name.insert(0, '_');
        }
        name
    }

    /// Package qualifier used in generated code: the last path segment.
    #[must_use]
    pub fn hybrids_alias(&self) -> &str {
        self.hybrids_package
            .rsplit('/')
            .next()
            .unwrap_or(&self.hybrids_package)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
