//! OmniQL XML schema parser.
//!
//! This module loads an [`Application`] from its XML description:
//!
//! ```xml
//! <application name="store">
//!     <table name="Item">
//!         <documentation short="An item for sale"/>
//!         <field name="SKU" type="String"/>
//!         <field name="Tags" type="Vector" items="String"/>
//!         <field name="Condition" type="ItemCondition">
//!             <documentation short="Physical state">Long description.</documentation>
//!         </field>
//!     </table>
//!     <enumeration name="Condition">
//!         <group name="ItemCondition">
//!             <item name="New"/>
//!             <item name="Used"/>
//!         </group>
//!     </enumeration>
//! </application>
//! ```

use crate::application::Application;
use crate::error::ParseError;
use crate::tables::{FieldDef, TableDef};
use crate::types::{Documentation, EnumerationDef, EnumerationGroupDef};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Parses an OmniQL application from an XML string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Parsed application or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed or a required attribute is
/// missing.
pub fn parse_application(xml: &str) -> Result<Application, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut application: Option<Application> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match (name, application.as_mut()) {
                    ("application", None) => {
                        application = Some(Application::new(required_attr(e, "name")?));
                    }
                    ("documentation", Some(app)) => {
                        app.documentation = Some(parse_documentation(&mut reader, e)?);
                    }
                    ("table", Some(app)) => {
                        let table = parse_table(&mut reader, e, &app.name)?;
                        app.add_table(table);
                    }
                    ("enumeration", Some(app)) => {
                        let enumeration = parse_enumeration(&mut reader, e)?;
                        app.add_enumeration(enumeration);
                    }
                    ("application", Some(_)) => {
                        return Err(ParseError::structure("multiple application elements"));
                    }
                    (_, Some(_)) => skip_to_end(&mut reader)?,
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                match (name, application.as_mut()) {
                    ("application", None) => {
                        application = Some(Application::new(required_attr(e, "name")?));
                    }
                    ("documentation", Some(app)) => {
                        app.documentation = Some(parse_documentation_attrs(e)?);
                    }
                    ("table", Some(app)) => {
                        let table = TableDef::new(required_attr(e, "name")?, app.name.clone());
                        app.add_table(table);
                    }
                    ("enumeration", Some(app)) => {
                        app.add_enumeration(EnumerationDef::new(required_attr(e, "name")?));
                    }
                    ("application", Some(_)) => {
                        return Err(ParseError::structure("multiple application elements"));
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    application.ok_or_else(|| ParseError::structure("No application element found"))
}

/// Parses a table definition and its fields.
fn parse_table(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    application: &str,
) -> Result<TableDef, ParseError> {
    let mut table = TableDef::new(required_attr(e, "name")?, application);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                match std::str::from_utf8(&name_bytes)? {
                    "field" => table.add_field(parse_field(reader, e)?),
                    "documentation" => {
                        table.documentation = Some(parse_documentation(reader, e)?);
                    }
                    _ => skip_to_end(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                match std::str::from_utf8(&name_bytes)? {
                    "field" => table.add_field(parse_field_attrs(e)?),
                    "documentation" => {
                        table.documentation = Some(parse_documentation_attrs(e)?);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "unterminated table '{}'",
                    table.name
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(table)
}

/// Parses a field element with content (documentation).
fn parse_field(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<FieldDef, ParseError> {
    let mut field = parse_field_attrs(e)?;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                if std::str::from_utf8(&name_bytes)? == "documentation" {
                    field.documentation = Some(parse_documentation(reader, e)?);
                } else {
                    skip_to_end(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                if std::str::from_utf8(&name_bytes)? == "documentation" {
                    field.documentation = Some(parse_documentation_attrs(e)?);
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(field)
}

/// Parses field attributes (empty element).
fn parse_field_attrs(e: &BytesStart<'_>) -> Result<FieldDef, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut items = None;

    for attr in e.attributes().flatten() {
        match std::str::from_utf8(attr.key.as_ref())? {
            "name" => name = Some(attr_value(&attr)?),
            "type" => type_name = Some(attr_value(&attr)?),
            "items" => items = Some(attr_value(&attr)?),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("field", "name"))?;
    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("field", "type"))?;

    let mut field = FieldDef::new(name, type_name);
    field.items = items;
    Ok(field)
}

/// Parses a documentation element whose text content is the long description.
///
/// Entity and character references are resolved and every line of the body
/// is trimmed, so indentation from the XML layout does not leak into the
/// generated comments.
fn parse_documentation(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<Documentation, ParseError> {
    let attrs = parse_documentation_attrs(e)?;
    let mut buf = Vec::new();
    let mut text = String::new();

    // References arrive as separate events; trimming each text event would
    // eat the spaces around them.
    reader.config_mut().trim_text(false);
    let result = loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => match t.decode() {
                Ok(decoded) => text.push_str(&decoded),
                Err(e) => break Err(ParseError::Xml(e.into())),
            },
            Ok(Event::CData(ref t)) => match t.decode() {
                Ok(decoded) => text.push_str(&decoded),
                Err(e) => break Err(ParseError::Xml(e.into())),
            },
            Ok(Event::GeneralRef(ref r)) => match resolve_reference(r) {
                Ok(resolved) => text.push_str(&resolved),
                Err(e) => break Err(e),
            },
            Ok(Event::Start(_)) => {
                if let Err(e) = skip_to_end(reader) {
                    break Err(e);
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break Ok(()),
            Err(e) => break Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    };
    reader.config_mut().trim_text(true);
    result?;

    let long = attrs
        .long_text()
        .map(str::to_string)
        .or_else(|| Some(dedent(&text)));
    Ok(Documentation::new(attrs.short_text().map(str::to_string), long))
}

/// Resolves a `&name;` or `&#N;` reference found in text content.
fn resolve_reference(r: &BytesRef<'_>) -> Result<String, ParseError> {
    if let Some(ch) = r.resolve_char_ref()? {
        return Ok(ch.to_string());
    }

    let name = r.decode().map_err(quick_xml::Error::from)?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| ParseError::structure(format!("unknown entity reference '&{};'", name)))
}

/// Trims every line and drops the leading and trailing blank lines.
fn dedent(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Parses documentation attributes (empty element).
fn parse_documentation_attrs(e: &BytesStart<'_>) -> Result<Documentation, ParseError> {
    let mut short = None;
    let mut long = None;

    for attr in e.attributes().flatten() {
        match std::str::from_utf8(attr.key.as_ref())? {
            "short" => short = Some(attr_value(&attr)?),
            "long" => long = Some(attr_value(&attr)?),
            _ => {}
        }
    }

    Ok(Documentation::new(short, long))
}

/// Parses an enumeration definition and its groups.
fn parse_enumeration(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<EnumerationDef, ParseError> {
    let mut enumeration = EnumerationDef::new(required_attr(e, "name")?);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                match std::str::from_utf8(&name_bytes)? {
                    "group" => enumeration.add_group(parse_group(reader, e)?),
                    "documentation" => {
                        enumeration.documentation = Some(parse_documentation(reader, e)?);
                    }
                    _ => skip_to_end(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                match std::str::from_utf8(&name_bytes)? {
                    "group" => {
                        enumeration.add_group(EnumerationGroupDef::new(required_attr(e, "name")?));
                    }
                    "documentation" => {
                        enumeration.documentation = Some(parse_documentation_attrs(e)?);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(enumeration)
}

/// Parses an enumeration group and its items.
fn parse_group(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<EnumerationGroupDef, ParseError> {
    let mut group = EnumerationGroupDef::new(required_attr(e, "name")?);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                match std::str::from_utf8(&name_bytes)? {
                    "item" => {
                        group.add_item(required_attr(e, "name")?);
                        skip_to_end(reader)?;
                    }
                    "documentation" => {
                        group.documentation = Some(parse_documentation(reader, e)?);
                    }
                    _ => skip_to_end(reader)?,
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                match std::str::from_utf8(&name_bytes)? {
                    "item" => group.add_item(required_attr(e, "name")?),
                    "documentation" => {
                        group.documentation = Some(parse_documentation_attrs(e)?);
                    }
                    _ => {}
                }
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(group)
}

/// Reads a required attribute from an element.
fn required_attr(e: &BytesStart<'_>, attribute: &str) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == attribute.as_bytes() {
            return attr_value(&attr);
        }
    }

    let name_bytes = e.name().as_ref().to_vec();
    let element = std::str::from_utf8(&name_bytes)?;
    Err(ParseError::missing_attr(element, attribute))
}

/// Returns an attribute value with entity and character references resolved.
fn attr_value(attr: &Attribute<'_>) -> Result<String, ParseError> {
    Ok(attr.unescape_value()?.into_owned())
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ResolvedTypeReference, SymbolResolver};

    const STORE_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<application name="store">
    <table name="Item">
        <documentation short="An item for sale"/>
        <field name="SKU" type="String">
            <documentation short="Stock keeping unit">Unique per variation.</documentation>
        </field>
        <field name="Tags" type="Vector" items="String"/>
        <field name="Condition" type="ItemCondition"/>
        <field name="Colors" type="Vector" items="Color"/>
    </table>
    <table name="Color">
        <field name="Name" type="String"/>
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
    fn test_parse_application() {
        let app = parse_application(STORE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(app.name, "store");
        assert_eq!(app.table_count(), 2);
        assert_eq!(app.enumerations.len(), 1);
    }

    #[test]
    fn test_parse_fields_in_order() {
        let app = parse_application(STORE_SCHEMA).expect("Failed to parse schema");
        let item = app.get_table("Item").expect("Item table");

        let names: Vec<&str> = item.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["SKU", "Tags", "Condition", "Colors"]);
        assert_eq!(item.application, "store");

        let tags = item.get_field("Tags").expect("Tags field");
        assert!(tags.is_vector());
        assert_eq!(tags.items_token(), Some("String"));
    }

    #[test]
    fn test_parse_documentation() {
        let app = parse_application(STORE_SCHEMA).expect("Failed to parse schema");
        let item = app.get_table("Item").expect("Item table");

        let table_doc = item.documentation.as_ref().expect("table doc");
        assert_eq!(table_doc.short_text(), Some("An item for sale"));
        assert_eq!(table_doc.long_text(), None);

        let sku_doc = item.fields[0].documentation.as_ref().expect("field doc");
        assert_eq!(sku_doc.short_text(), Some("Stock keeping unit"));
        assert_eq!(sku_doc.long_text(), Some("Unique per variation."));
    }

    #[test]
    fn test_parse_enumeration() {
        let app = parse_application(STORE_SCHEMA).expect("Failed to parse schema");
        let condition = app.get_enumeration("Condition").expect("enumeration");
        let group = condition.get_group("ItemCondition").expect("group");
        assert_eq!(group.items, vec!["New", "Used"]);

        assert_eq!(
            app.resolve("store", "ItemCondition").expect("resolve"),
            ResolvedTypeReference::enumeration_group("store/ItemCondition", "store/Condition")
        );
    }

    #[test]
    fn test_missing_field_type() {
        let xml = r#"<application name="store">
    <table name="Item">
        <field name="SKU"/>
    </table>
</application>"#;

        let err = parse_application(xml).unwrap_err();
        assert!(matches!(err, ParseError::MissingAttribute { .. }));
        assert!(err.to_string().contains("'type'"));
    }

    #[test]
    fn test_no_application_element() {
        let err = parse_application("<schema/>").unwrap_err();
        assert!(matches!(err, ParseError::InvalidStructure { .. }));
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let xml = r#"<application name="store">
    <resource name="Ignored"><field name="x" type="String"/></resource>
    <table name="Item"><field name="SKU" type="String"/></table>
</application>"#;

        let app = parse_application(xml).expect("Failed to parse schema");
        assert_eq!(app.table_count(), 1);
        assert_eq!(app.tables[0].fields.len(), 1);
    }

    #[test]
    fn test_documentation_entities_are_resolved() {
        let xml = r#"<application name="store">
    <table name="Item">
        <documentation short="A &amp; B &lt;C&gt; it&#39;s" long="x &lt; y"/>
        <field name="Price" type="String">
            <documentation short="Cost &amp; tax">x &lt; y &amp;&amp; it&#39;s &#x41;</documentation>
        </field>
    </table>
</application>"#;

        let app = parse_application(xml).expect("Failed to parse schema");
        let item = app.get_table("Item").expect("Item table");

        let table_doc = item.documentation.as_ref().expect("table doc");
        assert_eq!(table_doc.short_text(), Some("A & B <C> it's"));
        assert_eq!(table_doc.long_text(), Some("x < y"));

        let price_doc = item.fields[0].documentation.as_ref().expect("field doc");
        assert_eq!(price_doc.short_text(), Some("Cost & tax"));
        assert_eq!(price_doc.long_text(), Some("x < y && it's A"));
    }

    #[test]
    fn test_entities_in_names_are_resolved() {
        let xml = r#"<application name="st&#111;re">
    <table name="Item"><field name="SKU" type="Str&#105;ng"/></table>
</application>"#;

        let app = parse_application(xml).expect("Failed to parse schema");
        assert_eq!(app.name, "store");
        assert_eq!(app.tables[0].fields[0].type_name, "String");
    }

    #[test]
    fn test_multiline_documentation_is_dedented() {
        let xml = r#"<application name="store">
    <table name="Item">
        <field name="SKU" type="String">
            <documentation short="Stock keeping unit">
                Unique per variation.
                Never reused.
            </documentation>
        </field>
    </table>
</application>"#;

        let app = parse_application(xml).expect("Failed to parse schema");
        let doc = app.tables[0].fields[0]
            .documentation
            .as_ref()
            .expect("field doc");
        assert_eq!(doc.long_text(), Some("Unique per variation.\nNever reused."));
    }

    #[test]
    fn test_unknown_entity_is_rejected() {
        let xml = r#"<application name="store">
    <table name="Item"><documentation>&nbsp;</documentation></table>
</application>"#;

        let err = parse_application(xml).unwrap_err();
        assert!(err.to_string().contains("unknown entity reference '&nbsp;'"));
    }

    #[test]
    fn test_multiple_application_elements() {
        let xml = r#"<root><application name="a"></application><application name="b"/></root>"#;

        let err = parse_application(xml).unwrap_err();
        assert!(err.to_string().contains("multiple application elements"));
    }
}
