//! Import set for generated Go files.

use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// Deduplicated set of Go import paths.
///
/// Paths are kept sorted so the rendered block is identical across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    paths: BTreeSet<String>,
}

impl Imports {
    /// Creates an empty import set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an import path. Returns false if it was already present.
    pub fn add_import(&mut self, path: impl Into<String>) -> bool {
        self.paths.insert(path.into())
    }

    /// Returns true if the path is registered.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Number of distinct imports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no import is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the paths in render order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Writes the import block. Writes nothing when the set is empty.
    ///
    /// # Errors
    /// Returns `fmt::Error` if the underlying writer fails.
    pub fn write_to<W: Write>(&self, w: &mut W) -> fmt::Result {
        if self.paths.is_empty() {
            return Ok(());
        }
        w.write_str("import (\n")?;
        for path in &self.paths {
            writeln!(w, "\t\"{}\"", path)?;
        }
        w.write_str(")\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_imports_render_nothing() {
        let imports = Imports::new();
        let mut out = String::new();
        imports.write_to(&mut out).expect("write");
        assert!(out.is_empty());
        assert!(imports.is_empty());
    }

    #[test]
    fn test_add_import_deduplicates() {
        let mut imports = Imports::new();
        assert!(imports.add_import("github.com/nebtex/hybrids/golang/hybrids"));
        assert!(!imports.add_import("github.com/nebtex/hybrids/golang/hybrids"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_render_order_is_sorted() {
        let mut imports = Imports::new();
        imports.add_import("zeta/pkg");
        imports.add_import("alpha/pkg");

        let mut out = String::new();
        imports.write_to(&mut out).expect("write");
        assert_eq!(out, "import (\n\t\"alpha/pkg\"\n\t\"zeta/pkg\"\n)\n\n");
        assert_eq!(imports.iter().collect::<Vec<_>>(), vec!["alpha/pkg", "zeta/pkg"]);
    }
}
