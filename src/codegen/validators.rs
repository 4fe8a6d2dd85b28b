//! Validator emitter
//!
//! Produces one TypeScript validator function per named type: simple types
//! enforce their restriction facets, complex types check object shape,
//! required fields, arrays and delegate to the validators of referenced
//! types. Chained restrictions call the base validator first, so a facet
//! stack accumulates naturally at runtime.
//!
//! Pattern facets are compile-checked with the `regex` crate before being
//! embedded; a pattern that does not compile is skipped rather than
//! emitting a validator that throws.

use std::collections::HashSet;
use std::fmt::Write;

use crate::model::{Restriction, Schema, XsdComplexType, XsdElement, XsdSimpleType};

use super::builtins::PrimitiveKind;
use super::{js_string, resolve_type_name, NamingConvention, ResolvedType};

/// Emit runtime validator functions for a schema.
///
/// Functions are emitted in the schema's list order; pass a
/// [sorted](crate::model::Schema::sorted) schema for forward-reference-free
/// output.
pub fn emit_validators(schema: &Schema, naming: NamingConvention) -> String {
    let mut out = String::new();
    out.push_str("// Generated by xsd-typegen. Do not edit.\n\n");

    let mut seen: HashSet<String> = HashSet::new();

    for simple_type in &schema.simple_types {
        emit_simple_validator(&mut out, schema, simple_type, &mut seen);
    }

    for complex_type in &schema.complex_types {
        emit_complex_validator(&mut out, schema, complex_type, naming, &mut seen);
    }

    for element in &schema.elements {
        emit_element_validator(&mut out, schema, element, naming, &mut seen);
    }

    out
}

/// `validateFoo` — always pascal-suffixed so the function name is a valid
/// identifier regardless of the field convention
fn validator_name(type_name: &str) -> String {
    format!("validate{}", NamingConvention::Pascal.apply(type_name))
}

fn emit_simple_validator(
    out: &mut String,
    schema: &Schema,
    simple_type: &XsdSimpleType,
    seen: &mut HashSet<String>,
) {
    let Some(name) = &simple_type.name else {
        return;
    };
    let fn_name = validator_name(name);
    if !seen.insert(fn_name.clone()) {
        return;
    }

    let _ = writeln!(out, "export function {}(value: any): boolean {{", fn_name);
    for line in restriction_checks(schema, &simple_type.restriction) {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(out, "  return true;\n}}\n");
}

/// The check statements enforcing one restriction record
fn restriction_checks(schema: &Schema, restriction: &Restriction) -> Vec<String> {
    let mut checks = Vec::new();

    // Chained restriction: run the base type's validator first. A built-in
    // base degrades to a typeof check; an unknown base checks nothing.
    match resolve_type_name(schema, &restriction.base) {
        ResolvedType::Simple(base) => {
            checks.push(format!("if (!{}(value)) return false;", validator_name(&base)));
        }
        ResolvedType::Complex(base) => {
            checks.push(format!("if (!{}(value)) return false;", validator_name(&base)));
        }
        ResolvedType::Primitive(kind) => {
            if let Some(check) = primitive_check(kind, "value") {
                checks.push(format!("if (!{}) return false;", check));
            }
        }
    }

    if let Some(values) = &restriction.enumerations {
        if !values.is_empty() {
            let literals = values.iter().map(|v| js_string(v)).collect::<Vec<_>>().join(", ");
            checks.push(format!("if (![{}].includes(value)) return false;", literals));
        }
    }

    if let Some(n) = restriction.length {
        checks.push(format!("if (String(value).length !== {}) return false;", n));
    }
    if let Some(n) = restriction.min_length {
        checks.push(format!("if (String(value).length < {}) return false;", n));
    }
    if let Some(n) = restriction.max_length {
        checks.push(format!("if (String(value).length > {}) return false;", n));
    }

    if let Some(m) = restriction.min_inclusive {
        checks.push(format!("if (!(value >= {})) return false;", m));
    }
    if let Some(m) = restriction.max_inclusive {
        checks.push(format!("if (!(value <= {})) return false;", m));
    }
    if let Some(m) = restriction.min_exclusive {
        checks.push(format!("if (!(value > {})) return false;", m));
    }
    if let Some(m) = restriction.max_exclusive {
        checks.push(format!("if (!(value < {})) return false;", m));
    }

    if let Some(n) = restriction.total_digits {
        checks.push(format!(
            "if (String(value).replace(/[^0-9]/g, \"\").length > {}) return false;",
            n
        ));
    }
    if let Some(n) = restriction.fraction_digits {
        checks.push(format!(
            "if ((String(value).split(\".\")[1] || \"\").length > {}) return false;",
            n
        ));
    }

    if let Some(pattern) = &restriction.pattern {
        if regex::Regex::new(pattern).is_ok() {
            // XSD patterns are implicitly anchored.
            let source = js_string(&format!("^(?:{})$", pattern));
            checks.push(format!(
                "if (!new RegExp({}).test(String(value))) return false;",
                source
            ));
        }
    }

    checks
}

fn primitive_check(kind: PrimitiveKind, expr: &str) -> Option<String> {
    match kind {
        PrimitiveKind::String => Some(format!("(typeof {} === \"string\")", expr)),
        PrimitiveKind::Number => Some(format!("(typeof {} === \"number\")", expr)),
        PrimitiveKind::Boolean => Some(format!("(typeof {} === \"boolean\")", expr)),
        PrimitiveKind::Any => None,
    }
}

fn emit_complex_validator(
    out: &mut String,
    schema: &Schema,
    complex_type: &XsdComplexType,
    naming: NamingConvention,
    seen: &mut HashSet<String>,
) {
    let Some(name) = &complex_type.name else {
        return;
    };
    let fn_name = validator_name(name);
    if seen.contains(&fn_name) {
        return;
    }
    seen.insert(fn_name.clone());

    for element in &complex_type.content {
        if let Some(inline) = &element.complex_type {
            emit_complex_validator(out, schema, inline, naming, seen);
        }
    }

    let _ = writeln!(out, "export function {}(value: any): boolean {{", fn_name);
    let _ = writeln!(
        out,
        "  if (typeof value !== \"object\" || value === null) return false;"
    );

    if let Some(extension) = &complex_type.extension {
        if schema.find_complex_type(&extension.base).is_some() {
            let _ = writeln!(
                out,
                "  if (!{}(value)) return false;",
                validator_name(&extension.base)
            );
        }
    }

    for element in &complex_type.content {
        emit_field_checks(out, schema, element, naming);
    }

    for attribute in &complex_type.attributes {
        if attribute.name.is_empty() {
            continue;
        }
        let prop = js_string(&naming.apply(&attribute.name));
        if !attribute.is_effectively_optional() {
            let _ = writeln!(out, "  if (value[{}] === undefined) return false;", prop);
        }
        let kind = attribute
            .type_name
            .as_deref()
            .map(|t| match resolve_type_name(schema, t) {
                ResolvedType::Primitive(kind) => kind,
                _ => PrimitiveKind::Any,
            })
            .unwrap_or(PrimitiveKind::Any);
        if let Some(check) = primitive_check(kind, &format!("value[{}]", prop)) {
            let _ = writeln!(
                out,
                "  if (value[{}] !== undefined && !{}) return false;",
                prop, check
            );
        }
    }

    let _ = writeln!(out, "  return true;\n}}\n");
}

fn emit_field_checks(
    out: &mut String,
    schema: &Schema,
    element: &XsdElement,
    naming: NamingConvention,
) {
    let name = if element.is_ref {
        element.ref_name.as_deref().unwrap_or(&element.name)
    } else {
        &element.name
    };
    if name.is_empty() {
        return;
    }

    let prop = js_string(&naming.apply(name));
    let access = format!("value[{}]", prop);

    if !element.is_optional() {
        let _ = writeln!(out, "  if ({} === undefined) return false;", access);
    }

    let item_check = |expr: &str| element_check(schema, element, expr);

    let guard = if element.nillable {
        format!("{} !== undefined && {} !== null", access, access)
    } else {
        format!("{} !== undefined", access)
    };

    if element.is_array() {
        let _ = writeln!(
            out,
            "  if ({} && !Array.isArray({})) return false;",
            guard, access
        );
        if let Some(check) = item_check("v") {
            let _ = writeln!(
                out,
                "  if (Array.isArray({}) && !{}.every((v: any) => {})) return false;",
                access, access, check
            );
        }
    } else if let Some(check) = item_check(&access) {
        let _ = writeln!(out, "  if ({} && !{}) return false;", guard, check);
    }
}

/// The boolean expression validating one occurrence of an element's value,
/// `None` when nothing can be checked
fn element_check(schema: &Schema, element: &XsdElement, expr: &str) -> Option<String> {
    if let Some(inline) = &element.complex_type {
        if let Some(name) = &inline.name {
            return Some(format!("{}({})", validator_name(name), expr));
        }
    }
    if let Some(inline) = &element.simple_type {
        return match resolve_type_name(schema, &inline.restriction.base) {
            ResolvedType::Simple(base) | ResolvedType::Complex(base) => {
                Some(format!("{}({})", validator_name(&base), expr))
            }
            ResolvedType::Primitive(kind) => primitive_check(kind, expr),
        };
    }

    let reference = if element.is_ref {
        element.ref_name.as_deref()
    } else {
        element.type_name.as_deref()
    };

    let name = reference?;
    match resolve_type_name(schema, name) {
        ResolvedType::Complex(n) | ResolvedType::Simple(n) => {
            Some(format!("{}({})", validator_name(&n), expr))
        }
        ResolvedType::Primitive(kind) => primitive_check(kind, expr),
    }
}

fn emit_element_validator(
    out: &mut String,
    schema: &Schema,
    element: &XsdElement,
    naming: NamingConvention,
    seen: &mut HashSet<String>,
) {
    if element.name.is_empty() {
        return;
    }

    if let Some(inline) = &element.complex_type {
        // The hoisted complex validator carries the element's name already.
        emit_complex_validator(out, schema, inline, naming, seen);
        return;
    }

    let fn_name = validator_name(&element.name);
    if !seen.insert(fn_name.clone()) {
        return;
    }

    let body = element_check(schema, element, "value")
        .unwrap_or_else(|| "true".to_string());
    let _ = writeln!(
        out,
        "export function {}(value: any): boolean {{\n  return {};\n}}\n",
        fn_name, body
    );
}
