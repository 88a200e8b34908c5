//! Vector reader interface generation.

use omniql_schema::naming::{reader_name, vector_reader_name};

/// Renders the `Vector<Table>Reader` interface for a table.
///
/// The interface is the same for every table apart from the names.
#[must_use]
pub fn render_vector_reader(table_name: &str) -> String {
    let vector_name = vector_reader_name(table_name);
    let item_name = reader_name(table_name);
    let mut output = String::new();

    output.push_str(&format!("\n// {} ...\n", vector_name));
    output.push_str(&format!("type {} interface {{\n", vector_name));
    output.push_str("\t// Len returns the current size of this vector\n");
    output.push_str("\tLen() int\n\n");
    output.push_str("\t// Get returns the item in the position i.\n");
    output.push_str(
        "\t// If the item does not exist it returns the default value of the underlying data type.\n",
    );
    output.push_str("\t// When i < 0 or i >= Len() it returns a VectorInvalidIndexError.\n");
    output.push_str(&format!("\tGet(i int) ({}, error)\n", item_name));
    output.push_str("}\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_reader_names() {
        let output = render_vector_reader("Item");
        assert!(output.contains("type VectorItemReader interface {"));
        assert!(output.contains("\tLen() int\n"));
        assert!(output.contains("\tGet(i int) (ItemReader, error)\n"));
    }

    #[test]
    fn test_vector_reader_documents_out_of_range() {
        let output = render_vector_reader("Color");
        assert!(output.contains("VectorInvalidIndexError"));
        assert!(output.starts_with("\n// VectorColorReader ...\n"));
        assert!(output.ends_with("}\n"));
    }
}
