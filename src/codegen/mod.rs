//! Code generation
//!
//! Two emitters over the schema model, each a pure function
//! `(Schema, NamingConvention) -> String`: TypeScript type declarations and
//! the corresponding runtime validators. Both emit types in the order the
//! schema lists them — run the dependency orderer
//! ([`Schema::sorted`](crate::model::Schema::sorted)) first when the output
//! must be free of forward references.

pub mod builtins;
pub mod declarations;
pub mod naming;
pub mod validators;

pub use naming::NamingConvention;

use crate::model::Schema;
use builtins::{primitive_or_any, PrimitiveKind};

/// What a namespace-stripped type reference resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ResolvedType {
    /// A named complex type declared in this schema
    Complex(String),
    /// A named simple type declared in this schema
    Simple(String),
    /// A built-in primitive, or `Any` for anything unresolvable
    Primitive(PrimitiveKind),
}

/// Resolve a type reference against the schema, falling back to built-ins
/// and finally to `any`. Resolution happens here, at emission time — the
/// parser only records names.
pub(crate) fn resolve_type_name(schema: &Schema, name: &str) -> ResolvedType {
    if schema.find_complex_type(name).is_some() {
        ResolvedType::Complex(name.to_string())
    } else if schema.find_simple_type(name).is_some() {
        ResolvedType::Simple(name.to_string())
    } else {
        ResolvedType::Primitive(primitive_or_any(name))
    }
}

/// Casing for TYPE identifiers. Fields follow the requested convention
/// exactly; type names stay pascal for everything except `Original`, since
/// camel and kebab type identifiers are either unconventional or invalid
/// TypeScript.
pub(crate) fn type_ident(naming: NamingConvention, name: &str) -> String {
    match naming {
        NamingConvention::Original => name.to_string(),
        _ => NamingConvention::Pascal.apply(name),
    }
}

/// Casing for FIELD identifiers, quoted when the result is not a plain
/// identifier (kebab case).
pub(crate) fn field_ident(naming: NamingConvention, name: &str) -> String {
    let ident = naming.apply(name);
    if ident.contains('-') || ident.contains('.') {
        format!("\"{}\"", ident)
    } else {
        ident
    }
}

/// A double-quoted JavaScript string literal
pub(crate) fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
