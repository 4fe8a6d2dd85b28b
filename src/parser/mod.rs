//! XSD schema model building
//!
//! [`parse_xsd`] is the entry point: raw document text in, a normalized
//! [`Schema`] graph plus structured [`Diagnostics`] out. Only XML
//! tokenization failure escapes as a hard error; every other anomaly
//! degrades to a warning so a best-effort schema is always returned for any
//! text that at least tokenizes.

pub mod elements;
pub mod facets;
pub mod names;
pub mod references;

use crate::diagnostics::{Diagnostics, Warning};
use crate::documents::{Document, Element};
use crate::error::{Error, Result};
use crate::model::{FormDefault, Schema};
use crate::namespaces::{extract_namespaces, NodeReader};

use elements::{parse_complex_type, parse_element};
use facets::parse_simple_type;
use names::{attrs, tags};
use references::collect_referenced_elements;

/// Result of parsing one XSD document: the schema model plus every
/// non-fatal anomaly encountered along the way.
#[derive(Debug, Clone)]
pub struct ParsedSchema {
    /// The assembled schema, UNSORTED — dependency ordering is a separate
    /// pass applied by the emitter stage.
    pub schema: Schema,
    /// Warnings collected during the parse
    pub diagnostics: Diagnostics,
}

/// Parse raw XSD document text into a schema model.
///
/// Steps: tokenize, locate the schema root, resolve the XSD namespace
/// prefix, parse top-level elements/complexTypes/simpleTypes, fold in
/// annotation-embedded simple types, and surface globally referenced
/// elements.
pub fn parse_xsd(text: &str) -> Result<ParsedSchema> {
    let document = Document::from_string(text)?;
    let root = document
        .root()
        .ok_or_else(|| Error::Xml("document has no root element".to_string()))?;

    let mut diagnostics = Diagnostics::new();
    let schema_root = locate_schema_root(root, &mut diagnostics);

    let bindings = extract_namespaces(schema_root, &mut diagnostics);
    let reader = NodeReader::from_bindings(&bindings);

    let mut schema = Schema {
        target_namespace: schema_root
            .attr(attrs::TARGET_NAMESPACE)
            .map(|s| s.to_string()),
        element_form_default: schema_root
            .attr(attrs::ELEMENT_FORM_DEFAULT)
            .and_then(FormDefault::from_str),
        ..Default::default()
    };

    for node in reader.children(schema_root, tags::ELEMENT) {
        schema.elements.push(parse_element(node, &reader));
    }

    for node in reader.children(schema_root, tags::COMPLEX_TYPE) {
        schema
            .complex_types
            .push(parse_complex_type(node, &reader, None));
    }

    for node in reader.children(schema_root, tags::SIMPLE_TYPE) {
        if let Some(simple_type) = parse_simple_type(Some(node), &reader, None) {
            schema.simple_types.push(simple_type);
        }
    }

    // Tolerance for schemas that stash auxiliary simple types inside
    // annotation/documentation blocks.
    for annotation in reader.children(schema_root, tags::ANNOTATION) {
        for documentation in reader.children(annotation, tags::DOCUMENTATION) {
            for node in reader.children(documentation, tags::SIMPLE_TYPE) {
                if let Some(simple_type) = parse_simple_type(Some(node), &reader, None) {
                    schema.simple_types.push(simple_type);
                }
            }
        }
    }

    warn_unrecognized_children(schema_root, &reader, &mut diagnostics);

    let referenced = collect_referenced_elements(&schema.complex_types);
    schema.elements.extend(referenced);

    Ok(ParsedSchema {
        schema,
        diagnostics,
    })
}

/// Locate the `schema` element to parse from.
///
/// The document root itself is preferred; otherwise its children are
/// scanned for `schema`/`*:schema` candidates — multiple candidates warn
/// and deterministically pick the first, none warns and tolerantly falls
/// back to the root as-is.
fn locate_schema_root<'a>(root: &'a Element, diagnostics: &mut Diagnostics) -> &'a Element {
    if root.local_name() == tags::SCHEMA {
        return root;
    }

    let candidates: Vec<&Element> = root
        .children
        .iter()
        .filter(|c| c.local_name() == tags::SCHEMA)
        .collect();

    match candidates.len() {
        0 => {
            diagnostics.warn(Warning::MissingSchemaRoot);
            root
        }
        1 => candidates[0],
        count => {
            diagnostics.warn(Warning::AmbiguousSchemaRoot { count });
            candidates[0]
        }
    }
}

/// Warn once per schema child whose tag is not handled by this parser
fn warn_unrecognized_children(
    schema_root: &Element,
    reader: &NodeReader,
    diagnostics: &mut Diagnostics,
) {
    const RECOGNIZED: [&str; 4] = [
        tags::ELEMENT,
        tags::COMPLEX_TYPE,
        tags::SIMPLE_TYPE,
        tags::ANNOTATION,
    ];

    for child in &schema_root.children {
        if !RECOGNIZED.iter().any(|tag| reader.is(child, tag)) {
            diagnostics.warn(Warning::UnrecognizedSchemaChild {
                tag: child.local_name().to_string(),
            });
        }
    }
}
