//! Facet/restriction parsing
//!
//! Converts a `restriction` node into the normalized [`Restriction`]
//! constraint record. Each facet in parsed XSD form is itself a node
//! carrying a `value` attribute; numeric facets get an exact integer or
//! float parse, string facets are taken verbatim.

use crate::documents::Element;
use crate::model::{Restriction, WhiteSpace, XsdSimpleType};
use crate::namespaces::{strip_namespace, NodeReader};

use super::names::{attrs, tags};

/// Parse a `simpleType` node into a [`XsdSimpleType`].
///
/// Returns `None` only when the node itself is absent. `synthetic_name` is
/// the enclosing element's name, used when the type is anonymous; an
/// explicit `name` attribute wins over it.
pub fn parse_simple_type(
    node: Option<&Element>,
    reader: &NodeReader,
    synthetic_name: Option<&str>,
) -> Option<XsdSimpleType> {
    let node = node?;

    let name = node
        .attr(attrs::NAME)
        .map(|n| n.to_string())
        .or_else(|| synthetic_name.map(|n| n.to_string()));

    let restriction = reader
        .child(node, tags::RESTRICTION)
        .map(|r| parse_restriction(r, reader))
        .unwrap_or_default();

    Some(XsdSimpleType { name, restriction })
}

/// Parse a `restriction` node into the normalized constraint record
pub fn parse_restriction(node: &Element, reader: &NodeReader) -> Restriction {
    // A missing base is tolerated as an empty string; the error surfaces at
    // emission time.
    let base = node
        .attr(attrs::BASE)
        .map(strip_namespace)
        .unwrap_or("")
        .to_string();

    let enumeration_nodes = reader.children(node, tags::ENUMERATION);
    let enumerations = if enumeration_nodes.is_empty() {
        None
    } else {
        Some(
            enumeration_nodes
                .iter()
                .filter_map(|e| e.attr(attrs::VALUE))
                .map(|v| v.to_string())
                .collect(),
        )
    };

    Restriction {
        base,
        enumerations,
        min_length: int_facet(node, reader, "minLength"),
        max_length: int_facet(node, reader, "maxLength"),
        length: int_facet(node, reader, "length"),
        pattern: str_facet(node, reader, "pattern"),
        min_inclusive: float_facet(node, reader, "minInclusive"),
        max_inclusive: float_facet(node, reader, "maxInclusive"),
        min_exclusive: float_facet(node, reader, "minExclusive"),
        max_exclusive: float_facet(node, reader, "maxExclusive"),
        total_digits: int_facet(node, reader, "totalDigits"),
        fraction_digits: int_facet(node, reader, "fractionDigits"),
        white_space: str_facet(node, reader, "whiteSpace")
            .as_deref()
            .and_then(WhiteSpace::from_str),
    }
}

/// The `value` attribute of the first facet child with the given local name
fn facet_value<'a>(node: &'a Element, reader: &NodeReader, facet: &str) -> Option<&'a str> {
    reader.child(node, facet).and_then(|f| f.attr(attrs::VALUE))
}

fn int_facet(node: &Element, reader: &NodeReader, facet: &str) -> Option<u32> {
    facet_value(node, reader, facet).and_then(|v| v.parse().ok())
}

fn float_facet(node: &Element, reader: &NodeReader, facet: &str) -> Option<f64> {
    facet_value(node, reader, facet).and_then(|v| v.parse().ok())
}

fn str_facet(node: &Element, reader: &NodeReader, facet: &str) -> Option<String> {
    facet_value(node, reader, facet).map(|v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Document;

    fn parse_first_simple_type(xml: &str) -> XsdSimpleType {
        let doc = Document::from_string(xml).unwrap();
        let root = doc.root.unwrap();
        let reader = NodeReader::new(Some("xs"));
        let node = reader.child(&root, "simpleType");
        parse_simple_type(node, &reader, None).unwrap()
    }

    #[test]
    fn test_enumeration_collection() {
        let st = parse_first_simple_type(
            r#"<root>
                 <xs:simpleType name="S">
                   <xs:restriction base="xs:string">
                     <xs:enumeration value="a"/>
                     <xs:enumeration value="b"/>
                   </xs:restriction>
                 </xs:simpleType>
               </root>"#,
        );

        assert_eq!(st.name.as_deref(), Some("S"));
        assert_eq!(st.restriction.base, "string");
        assert_eq!(
            st.restriction.enumerations,
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_no_enumerations_is_absent_not_empty() {
        let st = parse_first_simple_type(
            r#"<root>
                 <xs:simpleType name="S">
                   <xs:restriction base="xs:string">
                     <xs:minLength value="1"/>
                   </xs:restriction>
                 </xs:simpleType>
               </root>"#,
        );

        assert_eq!(st.restriction.enumerations, None);
        assert_eq!(st.restriction.min_length, Some(1));
    }

    #[test]
    fn test_numeric_facets() {
        let st = parse_first_simple_type(
            r#"<root>
                 <xs:simpleType name="Amount">
                   <xs:restriction base="xs:decimal">
                     <xs:minInclusive value="0.5"/>
                     <xs:maxExclusive value="100"/>
                     <xs:totalDigits value="5"/>
                     <xs:fractionDigits value="2"/>
                   </xs:restriction>
                 </xs:simpleType>
               </root>"#,
        );

        assert_eq!(st.restriction.min_inclusive, Some(0.5));
        assert_eq!(st.restriction.max_exclusive, Some(100.0));
        assert_eq!(st.restriction.total_digits, Some(5));
        assert_eq!(st.restriction.fraction_digits, Some(2));
    }

    #[test]
    fn test_pattern_and_whitespace() {
        let st = parse_first_simple_type(
            r#"<root>
                 <xs:simpleType name="Code">
                   <xs:restriction base="xs:string">
                     <xs:pattern value="[A-Z]{2}\d+"/>
                     <xs:whiteSpace value="collapse"/>
                   </xs:restriction>
                 </xs:simpleType>
               </root>"#,
        );

        assert_eq!(st.restriction.pattern.as_deref(), Some("[A-Z]{2}\\d+"));
        assert_eq!(st.restriction.white_space, Some(WhiteSpace::Collapse));
    }

    #[test]
    fn test_missing_base_becomes_empty_string() {
        let st = parse_first_simple_type(
            r#"<root>
                 <xs:simpleType name="Odd">
                   <xs:restriction>
                     <xs:length value="3"/>
                   </xs:restriction>
                 </xs:simpleType>
               </root>"#,
        );

        assert_eq!(st.restriction.base, "");
        assert_eq!(st.restriction.length, Some(3));
    }

    #[test]
    fn test_absent_node_is_none() {
        let reader = NodeReader::new(Some("xs"));
        assert!(parse_simple_type(None, &reader, Some("x")).is_none());
    }
}
