//! Element, attribute and complex-type parsing
//!
//! The recursive heart of the schema builder. `parse_element`,
//! `parse_complex_type` and `parse_attributes` are mutually recursive with
//! each other and with the facet parser: an element may carry an inline
//! complex type, which carries elements, and so on.
//!
//! Failure semantics: structurally unusual but tokenizable input never
//! raises from here. Missing names become empty strings, unrecognized
//! children are skipped, and the anomaly surfaces at emission time.

use crate::documents::Element;
use crate::model::{Extension, MaxOccurs, XsdAttribute, XsdComplexType, XsdElement};
use crate::namespaces::{strip_namespace, NodeReader};

use super::facets::parse_simple_type;
use super::names::{attrs, tags};

/// Parse an `element` node, top-level or nested.
///
/// Inline `complexType`/`simpleType` children are parsed recursively and
/// receive this element's own name as their synthetic type name, so
/// anonymous inline types get a usable identifier.
pub fn parse_element(node: &Element, reader: &NodeReader) -> XsdElement {
    let name = node.attr(attrs::NAME).unwrap_or("").to_string();

    let mut element = XsdElement {
        name: name.clone(),
        type_name: node
            .attr(attrs::TYPE)
            .map(|t| strip_namespace(t).to_string()),
        min_occurs: node.attr(attrs::MIN_OCCURS).and_then(|v| v.parse().ok()),
        max_occurs: node.attr(attrs::MAX_OCCURS).and_then(MaxOccurs::from_str),
        nillable: node.attr(attrs::NILLABLE) == Some("true"),
        ..Default::default()
    };

    if let Some(target) = node.attr(attrs::REF) {
        element.is_ref = true;
        element.ref_name = Some(strip_namespace(target).to_string());
    }

    let synthetic = if name.is_empty() { None } else { Some(name.as_str()) };

    if let Some(ct_node) = reader.child(node, tags::COMPLEX_TYPE) {
        let complex_type = parse_complex_type(ct_node, reader, synthetic);
        element.attributes = complex_type.attributes.clone();
        element.complex_type = Some(Box::new(complex_type));
    }

    if let Some(simple_type) = parse_simple_type(reader.child(node, tags::SIMPLE_TYPE), reader, synthetic)
    {
        element.simple_type = Some(simple_type);
    }

    element
}

/// Parse the `attribute` children of a node into attribute declarations
pub fn parse_attributes(node: &Element, reader: &NodeReader) -> Vec<XsdAttribute> {
    reader
        .children(node, tags::ATTRIBUTE)
        .into_iter()
        .map(|attr_node| {
            let name = attr_node.attr(attrs::NAME).unwrap_or("").to_string();
            XsdAttribute {
                simple_type: parse_simple_type(
                    reader.child(attr_node, tags::SIMPLE_TYPE),
                    reader,
                    if name.is_empty() { None } else { Some(&name) },
                ),
                name,
                type_name: attr_node
                    .attr(attrs::TYPE)
                    .map(|t| strip_namespace(t).to_string()),
                usage: attr_node
                    .attr(attrs::USE)
                    .and_then(crate::model::AttributeUse::from_str)
                    .unwrap_or_default(),
                default: attr_node.attr(attrs::DEFAULT).map(|v| v.to_string()),
                fixed: attr_node.attr(attrs::FIXED).map(|v| v.to_string()),
            }
        })
        .collect()
}

/// Parse a `complexType` node.
///
/// `synthetic_name` is the enclosing element's name for anonymous inline
/// types; an explicit `name` attribute wins over it.
///
/// The flattened `content` list is assembled in a fixed order regardless of
/// the compositors' order of appearance in the source: direct `sequence`
/// elements first, then `choice`, then `all`, then the extension's own
/// `sequence`.
pub fn parse_complex_type(
    node: &Element,
    reader: &NodeReader,
    synthetic_name: Option<&str>,
) -> XsdComplexType {
    let mut complex_type = XsdComplexType {
        name: node
            .attr(attrs::NAME)
            .map(|n| n.to_string())
            .or_else(|| synthetic_name.map(|n| n.to_string())),
        attributes: parse_attributes(node, reader),
        ..Default::default()
    };

    if let Some(seq) = reader.child(node, tags::SEQUENCE) {
        let (elements, choice_elements) = parse_nested_elements(seq, reader);
        complex_type.sequence = elements;
        complex_type.choice.extend(choice_elements);
    }

    // A choice that is itself the compositor contributes all alternatives
    // to the flattened list; a choice nested inside sequence/all instead
    // contributed one representative above.
    let direct_choice: Vec<XsdElement> = reader
        .child(node, tags::CHOICE)
        .map(|choice| {
            reader
                .children(choice, tags::ELEMENT)
                .into_iter()
                .map(|e| parse_element(e, reader))
                .collect()
        })
        .unwrap_or_default();
    complex_type.choice.extend(direct_choice.clone());

    if let Some(all) = reader.child(node, tags::ALL) {
        let (elements, choice_elements) = parse_nested_elements(all, reader);
        complex_type.all = elements;
        complex_type.choice.extend(choice_elements);
    }

    complex_type.content.extend(complex_type.sequence.clone());
    complex_type.content.extend(direct_choice);
    complex_type.content.extend(complex_type.all.clone());

    if let Some(extension) = parse_extension(node, reader) {
        complex_type.content.extend(extension.sequence.clone());
        complex_type.attributes.extend(extension.attributes.clone());
        complex_type.extension = Some(extension);
    }

    complex_type
}

/// Parse the `element` children of a compositor, merging any `choice`
/// nested mid-compositor.
///
/// A nested choice contributes ONE representative entry (its first
/// alternative) to the flat element list — so the choice still yields a
/// field in the emitted type — while ALL alternatives are returned
/// separately for the complex type's `choice` field.
fn parse_nested_elements(
    compositor: &Element,
    reader: &NodeReader,
) -> (Vec<XsdElement>, Vec<XsdElement>) {
    let mut elements = Vec::new();
    let mut choice_elements = Vec::new();

    for child in &compositor.children {
        if reader.is(child, tags::ELEMENT) {
            elements.push(parse_element(child, reader));
        } else if reader.is(child, tags::CHOICE) {
            let alternatives: Vec<XsdElement> = reader
                .children(child, tags::ELEMENT)
                .into_iter()
                .map(|e| parse_element(e, reader))
                .collect();
            if let Some(representative) = alternatives.first() {
                elements.push(representative.clone());
            }
            choice_elements.extend(alternatives);
        }
        // Anything else (annotation, nested sequence, wildcards) is
        // silently skipped.
    }

    (elements, choice_elements)
}

/// Parse a `complexContent`/`simpleContent` wrapper with an `extension`.
///
/// The base type is recorded as a reference only; its fields are resolved
/// by the emitter, never inlined here.
fn parse_extension(node: &Element, reader: &NodeReader) -> Option<Extension> {
    let wrapper = reader
        .child(node, tags::COMPLEX_CONTENT)
        .or_else(|| reader.child(node, tags::SIMPLE_CONTENT))?;
    let ext_node = reader.child(wrapper, tags::EXTENSION)?;

    let mut extension = Extension {
        base: ext_node
            .attr(attrs::BASE)
            .map(strip_namespace)
            .unwrap_or("")
            .to_string(),
        attributes: parse_attributes(ext_node, reader),
        ..Default::default()
    };

    if let Some(seq) = reader.child(ext_node, tags::SEQUENCE) {
        let (elements, _choice_elements) = parse_nested_elements(seq, reader);
        extension.sequence = elements;
    }

    Some(extension)
}
