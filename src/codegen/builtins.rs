//! XSD built-in primitive table
//!
//! A static dictionary from XSD built-in type local names to the TypeScript
//! type they map to and the primitive check the validator emitter uses.
//! Names not in the table (and missing names) fall back to `any`, matching
//! the parser's tolerance of unresolved references.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// The primitive shape a built-in maps to on the TypeScript side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `typeof value === "string"`
    String,
    /// `typeof value === "number"`
    Number,
    /// `typeof value === "boolean"`
    Boolean,
    /// No check; anything goes
    Any,
}

impl PrimitiveKind {
    /// The TypeScript type name for this primitive
    pub fn ts_type(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Any => "any",
        }
    }
}

static BUILTINS: Lazy<IndexMap<&'static str, PrimitiveKind>> = Lazy::new(|| {
    use PrimitiveKind::*;
    IndexMap::from_iter([
        // String space
        ("string", String),
        ("normalizedString", String),
        ("token", String),
        ("language", String),
        ("Name", String),
        ("NCName", String),
        ("ID", String),
        ("IDREF", String),
        ("IDREFS", String),
        ("ENTITY", String),
        ("ENTITIES", String),
        ("NMTOKEN", String),
        ("NMTOKENS", String),
        ("anyURI", String),
        ("QName", String),
        ("NOTATION", String),
        // Dates and times carry their lexical form across
        ("duration", String),
        ("dateTime", String),
        ("time", String),
        ("date", String),
        ("gYearMonth", String),
        ("gYear", String),
        ("gMonthDay", String),
        ("gDay", String),
        ("gMonth", String),
        // Binary
        ("hexBinary", String),
        ("base64Binary", String),
        // Numeric space
        ("decimal", Number),
        ("integer", Number),
        ("long", Number),
        ("int", Number),
        ("short", Number),
        ("byte", Number),
        ("nonNegativeInteger", Number),
        ("positiveInteger", Number),
        ("nonPositiveInteger", Number),
        ("negativeInteger", Number),
        ("unsignedLong", Number),
        ("unsignedInt", Number),
        ("unsignedShort", Number),
        ("unsignedByte", Number),
        ("float", Number),
        ("double", Number),
        // Boolean
        ("boolean", Boolean),
        // Wildcards
        ("anyType", Any),
        ("anySimpleType", Any),
    ])
});

/// Look up a built-in type by its namespace-stripped local name
pub fn lookup_builtin(local_name: &str) -> Option<PrimitiveKind> {
    BUILTINS.get(local_name).copied()
}

/// The primitive kind for a type name, `Any` when unknown or empty
pub fn primitive_or_any(local_name: &str) -> PrimitiveKind {
    lookup_builtin(local_name).unwrap_or(PrimitiveKind::Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        assert_eq!(lookup_builtin("string"), Some(PrimitiveKind::String));
        assert_eq!(lookup_builtin("int"), Some(PrimitiveKind::Number));
        assert_eq!(lookup_builtin("boolean"), Some(PrimitiveKind::Boolean));
        assert_eq!(lookup_builtin("dateTime"), Some(PrimitiveKind::String));
    }

    #[test]
    fn test_unknown_falls_back_to_any() {
        assert_eq!(lookup_builtin("NotAThing"), None);
        assert_eq!(primitive_or_any("NotAThing"), PrimitiveKind::Any);
        assert_eq!(primitive_or_any(""), PrimitiveKind::Any);
    }

    #[test]
    fn test_ts_type_names() {
        assert_eq!(PrimitiveKind::Number.ts_type(), "number");
        assert_eq!(PrimitiveKind::Any.ts_type(), "any");
    }
}
