//! Type-declaration emitter
//!
//! Maps the schema model to TypeScript declarations: named simple types
//! become type aliases, complex types become interfaces (extensions become
//! `extends` clauses — the base is referenced, never inlined), and
//! top-level elements become aliases onto their types. Inline anonymous
//! types are hoisted to named interfaces under their synthetic names,
//! nested-first so every reference points backwards.
//!
//! A `simpleContent` extension of a non-complex base (a primitive or a
//! named simple type) has no interface to extend; its text content is
//! surfaced as a `value` field instead.

use std::collections::HashSet;
use std::fmt::Write;

use crate::model::{Schema, XsdAttribute, XsdComplexType, XsdElement, XsdSimpleType};

use super::builtins::primitive_or_any;
use super::{field_ident, js_string, resolve_type_name, type_ident, NamingConvention, ResolvedType};

/// Emit TypeScript type declarations for a schema.
///
/// Types are emitted in the schema's list order; pass a
/// [sorted](crate::model::Schema::sorted) schema for forward-reference-free
/// output.
pub fn emit_declarations(schema: &Schema, naming: NamingConvention) -> String {
    let mut out = String::new();
    out.push_str("// Generated by xsd-typegen. Do not edit.\n\n");

    let mut seen: HashSet<String> = HashSet::new();

    for simple_type in &schema.simple_types {
        emit_simple_type(&mut out, schema, simple_type, naming, &mut seen);
    }

    for complex_type in &schema.complex_types {
        emit_complex_type(&mut out, schema, complex_type, naming, &mut seen);
    }

    for element in &schema.elements {
        emit_element(&mut out, schema, element, naming, &mut seen);
    }

    out
}

fn emit_simple_type(
    out: &mut String,
    schema: &Schema,
    simple_type: &XsdSimpleType,
    naming: NamingConvention,
    seen: &mut HashSet<String>,
) {
    let Some(name) = &simple_type.name else {
        return;
    };
    let ident = type_ident(naming, name);
    if !seen.insert(ident.clone()) {
        return;
    }

    let _ = writeln!(
        out,
        "export type {} = {};\n",
        ident,
        simple_type_ts(schema, simple_type, naming)
    );
}

/// The TypeScript right-hand side for a simple type: an enumeration becomes
/// a string-literal union, anything else resolves its restriction base.
fn simple_type_ts(schema: &Schema, simple_type: &XsdSimpleType, naming: NamingConvention) -> String {
    if let Some(values) = &simple_type.restriction.enumerations {
        if !values.is_empty() {
            return values
                .iter()
                .map(|v| js_string(v))
                .collect::<Vec<_>>()
                .join(" | ");
        }
    }

    let base = &simple_type.restriction.base;
    match resolve_type_name(schema, base) {
        ResolvedType::Simple(name) | ResolvedType::Complex(name) => type_ident(naming, &name),
        ResolvedType::Primitive(kind) => kind.ts_type().to_string(),
    }
}

fn emit_complex_type(
    out: &mut String,
    schema: &Schema,
    complex_type: &XsdComplexType,
    naming: NamingConvention,
    seen: &mut HashSet<String>,
) {
    let Some(name) = &complex_type.name else {
        return;
    };
    let ident = type_ident(naming, name);
    if seen.contains(&ident) {
        return;
    }
    seen.insert(ident.clone());

    // Hoist inline anonymous types first so every reference points backwards.
    for element in &complex_type.content {
        if let Some(inline) = &element.complex_type {
            emit_complex_type(out, schema, inline, naming, seen);
        }
    }

    let extends = complex_type
        .extension
        .as_ref()
        .filter(|ext| schema.find_complex_type(&ext.base).is_some())
        .map(|ext| format!(" extends {}", type_ident(naming, &ext.base)))
        .unwrap_or_default();

    let _ = writeln!(out, "export interface {}{} {{", ident, extends);
    if let Some(extension) = &complex_type.extension {
        if !extension.base.is_empty() && schema.find_complex_type(&extension.base).is_none() {
            let ts_type = match resolve_type_name(schema, &extension.base) {
                ResolvedType::Simple(name) | ResolvedType::Complex(name) => {
                    type_ident(naming, &name)
                }
                ResolvedType::Primitive(kind) => kind.ts_type().to_string(),
            };
            let _ = writeln!(out, "  {}: {};", field_ident(naming, "value"), ts_type);
        }
    }
    for element in &complex_type.content {
        emit_field(out, schema, element, naming);
    }
    for attribute in &complex_type.attributes {
        emit_attribute_field(out, schema, attribute, naming);
    }
    let _ = writeln!(out, "}}\n");
}

fn emit_field(out: &mut String, schema: &Schema, element: &XsdElement, naming: NamingConvention) {
    let name = if element.is_ref {
        element.ref_name.as_deref().unwrap_or(&element.name)
    } else {
        &element.name
    };
    if name.is_empty() {
        return;
    }

    let mut ts_type = element_ts_type(schema, element, naming);
    if element.is_array() {
        ts_type = format!("{}[]", ts_type);
    }
    if element.nillable {
        ts_type = format!("{} | null", ts_type);
    }

    let marker = if element.is_optional() { "?" } else { "" };
    let _ = writeln!(out, "  {}{}: {};", field_ident(naming, name), marker, ts_type);
}

fn emit_attribute_field(
    out: &mut String,
    schema: &Schema,
    attribute: &XsdAttribute,
    naming: NamingConvention,
) {
    if attribute.name.is_empty() || attribute.usage == crate::model::AttributeUse::Prohibited {
        return;
    }

    let ts_type = match (&attribute.simple_type, &attribute.type_name) {
        (Some(inline), _) => simple_type_ts(schema, inline, naming),
        (None, Some(type_name)) => match resolve_type_name(schema, type_name) {
            ResolvedType::Simple(name) | ResolvedType::Complex(name) => type_ident(naming, &name),
            ResolvedType::Primitive(kind) => kind.ts_type().to_string(),
        },
        (None, None) => primitive_or_any("").ts_type().to_string(),
    };

    let marker = if attribute.is_effectively_optional() {
        "?"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "  {}{}: {};",
        field_ident(naming, &attribute.name),
        marker,
        ts_type
    );
}

/// The TypeScript type of an element's value, before cardinality wrapping
fn element_ts_type(schema: &Schema, element: &XsdElement, naming: NamingConvention) -> String {
    if let Some(inline) = &element.complex_type {
        if let Some(name) = &inline.name {
            return type_ident(naming, name);
        }
    }
    if let Some(inline) = &element.simple_type {
        return simple_type_ts(schema, inline, naming);
    }

    let reference = if element.is_ref {
        element.ref_name.as_deref()
    } else {
        element.type_name.as_deref()
    };

    match reference {
        Some(name) => match resolve_type_name(schema, name) {
            ResolvedType::Complex(n) | ResolvedType::Simple(n) => type_ident(naming, &n),
            ResolvedType::Primitive(kind) => {
                // A ref target resolves through the global element it names.
                if element.is_ref {
                    if let Some(global) = schema.find_element(name) {
                        if !std::ptr::eq(global, element) {
                            return element_ts_type(schema, global, naming);
                        }
                    }
                }
                kind.ts_type().to_string()
            }
        },
        None => "any".to_string(),
    }
}

fn emit_element(
    out: &mut String,
    schema: &Schema,
    element: &XsdElement,
    naming: NamingConvention,
    seen: &mut HashSet<String>,
) {
    if element.name.is_empty() {
        return;
    }
    let ident = type_ident(naming, &element.name);
    if seen.contains(&ident) {
        return;
    }

    if let Some(inline) = &element.complex_type {
        // The hoisted interface carries the element's synthetic name.
        emit_complex_type(out, schema, inline, naming, seen);
        return;
    }

    seen.insert(ident.clone());
    let ts_type = element_ts_type(schema, element, naming);
    let _ = writeln!(out, "export type {} = {};\n", ident, ts_type);
}
