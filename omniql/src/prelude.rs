//! Prelude module for convenient imports.
//!
//! ```ignore
//! use omniql::prelude::*;
//! ```

// Runtime types
pub use omniql_core::error::{Error as CoreError, Result as CoreResult};
pub use omniql_core::vector::{SliceVector, VectorReader, VectorStringReader};

// Schema types
pub use omniql_schema::{
    Application, Documentation, EnumerationDef, EnumerationGroupDef, FieldDef, ReferenceKind,
    ResolveError, ResolvedTypeReference, SymbolResolver, TableDef, parse_application,
    validate_application,
};

// Codegen types
pub use omniql_codegen::{
    AccessorKind, ApplicationGenerator, CodegenError, GeneratedFile, GeneratorConfig,
    TableReaderGenerator, UnresolvedPolicy, generate_from_file, generate_from_xml, generate_table,
};

#[cfg(test)]
mod tests {
    use super::*;

    const STORE_SCHEMA: &str = r#"<application name="store">
    <table name="Item">
        <documentation short="is an item for sale."/>
        <field name="SKU" type="String"/>
        <field name="Condition" type="Color"/>
        <field name="State" type="ItemCondition"/>
        <field name="Tags" type="Vector" items="String"/>
    </table>
    <table name="Color">
        <field name="Code" type="String"/>
    </table>
    <enumeration name="Condition">
        <group name="ItemCondition">
            <item name="New"/>
            <item name="Used"/>
        </group>
    </enumeration>
</application>"#;

    #[test]
    fn test_end_to_end_item_interface() {
        let app = parse_application(STORE_SCHEMA).expect("Failed to parse");
        validate_application(&app).expect("valid");

        let output = ApplicationGenerator::new(&app)
            .generate_table("Item")
            .expect("generate");

        assert!(output.starts_with("import (\n"));
        assert!(output.contains("// ItemReader is an item for sale.\ntype ItemReader interface {\n"));
        assert!(output.contains("\tSKU() string\n"));
        assert!(output.contains("\tCondition() (ColorReader, error)\n"));
        assert!(output.contains("\tState() Condition\n"));
        assert!(output.contains("\tTags() hybrids.VectorStringReader\n"));
        assert!(output.contains("type VectorItemReader interface {"));
    }

    #[test]
    fn test_vector_item_reader_contract() {
        // Three rows backing a VectorItemReader.
        let rows = [Some("a".to_string()), Some("b".to_string()), None];
        let vector = SliceVector::new(&rows);

        assert_eq!(vector.len(), 3);
        assert_eq!(vector.get(1), Ok("b".to_string()));
        assert_eq!(vector.get(2), Ok(String::new()));
        assert!(vector.get(5).expect_err("past end").is_out_of_range());
        assert!(vector.get(-1).expect_err("negative").is_out_of_range());
    }

    #[test]
    fn test_write_application() {
        let app = parse_application(STORE_SCHEMA).expect("Failed to parse");
        let dir = tempfile::tempdir().expect("tempdir");

        let paths = ApplicationGenerator::new(&app)
            .write_to_dir(dir.path())
            .expect("write");
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.exists()));
    }
}
