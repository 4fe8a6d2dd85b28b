//! The schema model
//!
//! This is the normalized, in-memory graph one XSD document parses into.
//! It is built once per document, optionally reordered by the dependency
//! orderer, and consumed read-only by the emitters. Absent fields are
//! `Option` or an empty `Vec`, never sentinel strings — with one deliberate
//! exception: a restriction whose `base` attribute is missing records an
//! empty string, deferring the error to emission time.

use serde::{Serialize, Serializer};

/// Value of `elementFormDefault` on a schema root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormDefault {
    /// Locally declared elements must be namespace-qualified
    Qualified,
    /// Locally declared elements are unqualified
    Unqualified,
}

impl FormDefault {
    /// Parse from the attribute value, `None` for anything unrecognized
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "qualified" => Some(FormDefault::Qualified),
            "unqualified" => Some(FormDefault::Unqualified),
            _ => None,
        }
    }
}

/// Upper cardinality bound of an element.
///
/// `maxOccurs="unbounded"` is preserved as its own variant, never coerced
/// to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxOccurs {
    /// A concrete occurrence bound
    Bounded(u32),
    /// `maxOccurs="unbounded"`
    Unbounded,
}

impl MaxOccurs {
    /// Parse from the attribute value, `None` for anything unrecognized
    pub fn from_str(s: &str) -> Option<Self> {
        if s == "unbounded" {
            Some(MaxOccurs::Unbounded)
        } else {
            s.parse().ok().map(MaxOccurs::Bounded)
        }
    }

    /// Whether this bound allows more than one occurrence
    pub fn is_many(&self) -> bool {
        match self {
            MaxOccurs::Unbounded => true,
            MaxOccurs::Bounded(n) => *n > 1,
        }
    }
}

impl Serialize for MaxOccurs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MaxOccurs::Bounded(n) => serializer.serialize_u32(*n),
            MaxOccurs::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

/// Value of the `use` attribute on an attribute declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeUse {
    /// The attribute must be present
    Required,
    /// The attribute may be present (the XSD default)
    #[default]
    Optional,
    /// The attribute must not be present
    Prohibited,
}

impl AttributeUse {
    /// Parse from the attribute value, `None` for anything unrecognized
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "required" => Some(AttributeUse::Required),
            "optional" => Some(AttributeUse::Optional),
            "prohibited" => Some(AttributeUse::Prohibited),
            _ => None,
        }
    }
}

/// White space handling modes for the `whiteSpace` facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WhiteSpace {
    /// Preserve all white space
    Preserve,
    /// Replace tabs and newlines with spaces
    Replace,
    /// Replace and collapse multiple spaces
    Collapse,
}

impl WhiteSpace {
    /// Parse from the facet value, `None` for anything unrecognized
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "preserve" => Some(WhiteSpace::Preserve),
            "replace" => Some(WhiteSpace::Replace),
            "collapse" => Some(WhiteSpace::Collapse),
            _ => None,
        }
    }
}

/// Normalized constraint record of a `restriction` node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Restriction {
    /// Base type name, namespace-stripped. Empty string when the source
    /// omitted it; the error surfaces at emission time, not here.
    pub base: String,
    /// All `enumeration` facet values in document order. `None` when no
    /// enumeration facets occurred — presence, not emptiness, is the signal.
    pub enumerations: Option<Vec<String>>,
    /// `minLength` facet
    pub min_length: Option<u32>,
    /// `maxLength` facet
    pub max_length: Option<u32>,
    /// `length` facet
    pub length: Option<u32>,
    /// `pattern` facet, raw regex source, unescaped
    pub pattern: Option<String>,
    /// `minInclusive` facet
    pub min_inclusive: Option<f64>,
    /// `maxInclusive` facet
    pub max_inclusive: Option<f64>,
    /// `minExclusive` facet
    pub min_exclusive: Option<f64>,
    /// `maxExclusive` facet
    pub max_exclusive: Option<f64>,
    /// `totalDigits` facet
    pub total_digits: Option<u32>,
    /// `fractionDigits` facet
    pub fraction_digits: Option<u32>,
    /// `whiteSpace` facet
    pub white_space: Option<WhiteSpace>,
}

/// A simple type: a name (absent for anonymous inline types) plus its
/// restriction. `base` may name a built-in primitive or another simple type
/// in the same schema (chained restriction); which one is a lookup at
/// emission time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XsdSimpleType {
    /// Type name; `None` for anonymous inline types
    pub name: Option<String>,
    /// The constraint record
    pub restriction: Restriction,
}

/// An attribute declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XsdAttribute {
    /// Attribute name
    pub name: String,
    /// Referenced type name, namespace-stripped
    pub type_name: Option<String>,
    /// The `use` attribute, `optional` when absent
    pub usage: AttributeUse,
    /// Default literal value
    pub default: Option<String>,
    /// Fixed literal value
    pub fixed: Option<String>,
    /// Inline restriction, mutually exclusive with `type_name` in valid
    /// input (not enforced here)
    pub simple_type: Option<XsdSimpleType>,
}

impl XsdAttribute {
    /// Whether a generated field for this attribute may be omitted at
    /// construction: anything not required, or carrying a default/fixed
    /// value.
    pub fn is_effectively_optional(&self) -> bool {
        self.usage != AttributeUse::Required || self.default.is_some() || self.fixed.is_some()
    }
}

/// An element declaration, top-level or nested
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XsdElement {
    /// Element name. Empty string when the source omitted it (tolerated;
    /// resolves to a generic fallback downstream).
    pub name: String,
    /// Referenced type name, namespace-stripped
    pub type_name: Option<String>,
    /// Inline complex type, synthetically named after this element
    pub complex_type: Option<Box<XsdComplexType>>,
    /// Inline simple type, synthetically named after this element
    pub simple_type: Option<XsdSimpleType>,
    /// Attributes declared directly or inherited from a referenced type
    pub attributes: Vec<XsdAttribute>,
    /// `minOccurs`; absent means 1
    pub min_occurs: Option<u32>,
    /// `maxOccurs`; absent means 1
    pub max_occurs: Option<MaxOccurs>,
    /// Whether this is a reference to a globally declared element
    pub is_ref: bool,
    /// The `ref` target name, namespace-stripped
    pub ref_name: Option<String>,
    /// The `nillable` attribute, false when absent
    pub nillable: bool,
}

impl XsdElement {
    /// Create a named element with all other fields at their defaults
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// `minOccurs == 0` means the generated field is optional
    pub fn is_optional(&self) -> bool {
        self.min_occurs == Some(0)
    }

    /// `maxOccurs` of `unbounded` or greater than 1 means the generated
    /// field is a sequence. Independent of [`is_optional`](Self::is_optional);
    /// both may hold (optional array).
    pub fn is_array(&self) -> bool {
        self.max_occurs.map(|m| m.is_many()).unwrap_or(false)
    }
}

/// An `extension` inside `complexContent`/`simpleContent`: inherit the
/// fields of `base`, then add these. The base type is carried as a
/// reference only — its own fields are never inlined here; the emitter
/// resolves the base separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extension {
    /// Base type name, namespace-stripped
    pub base: String,
    /// The extension's own newly declared sequence elements
    pub sequence: Vec<XsdElement>,
    /// The extension's own newly declared attributes
    pub attributes: Vec<XsdAttribute>,
}

/// A complex type declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XsdComplexType {
    /// Type name; `None` for anonymous inline types until the parser
    /// assigns the enclosing element's name
    pub name: Option<String>,
    /// Elements of the `sequence` compositor
    pub sequence: Vec<XsdElement>,
    /// Elements of the `choice` compositor, including choices found nested
    /// inside a `sequence`/`all`
    pub choice: Vec<XsdElement>,
    /// Elements of the `all` compositor
    pub all: Vec<XsdElement>,
    /// The flattened field list actually used by the emitters: sequence,
    /// then choice, then all, then extension-sequence elements, in that
    /// fixed order. Derived state — always the concatenation of the
    /// compositor lists present.
    pub content: Vec<XsdElement>,
    /// Attributes declared on the type, including those added by an
    /// extension
    pub attributes: Vec<XsdAttribute>,
    /// Extension record, when the type derives from a base
    pub extension: Option<Extension>,
}

/// The root value produced by parsing one XSD document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// `targetNamespace` of the schema root; informational only
    pub target_namespace: Option<String>,
    /// `elementFormDefault` of the schema root
    pub element_form_default: Option<FormDefault>,
    /// Top-level named elements, including those surfaced from `ref` usages
    pub elements: Vec<XsdElement>,
    /// Top-level named complex types, in document order until sorted
    pub complex_types: Vec<XsdComplexType>,
    /// Top-level named simple types, in document order until sorted
    pub simple_types: Vec<XsdSimpleType>,
}

impl Schema {
    /// Look up a top-level complex type by name
    pub fn find_complex_type(&self, name: &str) -> Option<&XsdComplexType> {
        self.complex_types
            .iter()
            .find(|ct| ct.name.as_deref() == Some(name))
    }

    /// Look up a top-level simple type by name
    pub fn find_simple_type(&self, name: &str) -> Option<&XsdSimpleType> {
        self.simple_types
            .iter()
            .find(|st| st.name.as_deref() == Some(name))
    }

    /// Look up a top-level element by name
    pub fn find_element(&self, name: &str) -> Option<&XsdElement> {
        self.elements.iter().find(|e| e.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_occurs_parse() {
        assert_eq!(MaxOccurs::from_str("1"), Some(MaxOccurs::Bounded(1)));
        assert_eq!(MaxOccurs::from_str("unbounded"), Some(MaxOccurs::Unbounded));
        assert_eq!(MaxOccurs::from_str("lots"), None);
    }

    #[test]
    fn test_max_occurs_is_many() {
        assert!(!MaxOccurs::Bounded(1).is_many());
        assert!(MaxOccurs::Bounded(2).is_many());
        assert!(MaxOccurs::Unbounded.is_many());
    }

    #[test]
    fn test_cardinality_helpers() {
        let mut elem = XsdElement::named("item");
        assert!(!elem.is_optional());
        assert!(!elem.is_array());

        elem.min_occurs = Some(0);
        elem.max_occurs = Some(MaxOccurs::Unbounded);
        assert!(elem.is_optional());
        assert!(elem.is_array());
    }

    #[test]
    fn test_attribute_use_default() {
        let attr = XsdAttribute::default();
        assert_eq!(attr.usage, AttributeUse::Optional);
        assert!(attr.is_effectively_optional());

        let required = XsdAttribute {
            name: "id".to_string(),
            usage: AttributeUse::Required,
            ..Default::default()
        };
        assert!(!required.is_effectively_optional());

        let required_with_default = XsdAttribute {
            default: Some("0".to_string()),
            ..required
        };
        assert!(required_with_default.is_effectively_optional());
    }

    #[test]
    fn test_max_occurs_serializes_as_sentinel() {
        let many = serde_json::to_value(MaxOccurs::Unbounded).unwrap();
        assert_eq!(many, serde_json::json!("unbounded"));

        let bounded = serde_json::to_value(MaxOccurs::Bounded(3)).unwrap();
        assert_eq!(bounded, serde_json::json!(3));
    }
}
