//! Reference collection
//!
//! A `<xs:element ref="globalThing"/>` used deep inside a complex type must
//! resolve against `schema.elements` by the TARGET name when the emitters
//! later look it up. This pass walks the complex-type forest and promotes
//! every `ref` usage to a top-level element named after its target.
//!
//! Deliberately does not deduplicate: consumers that key by name own the
//! idempotence, not the collector.

use crate::model::{XsdComplexType, XsdElement};

/// Surface all `ref`-using elements of the given complex types as
/// top-level named elements, in deterministic traversal order.
pub fn collect_referenced_elements(complex_types: &[XsdComplexType]) -> Vec<XsdElement> {
    let mut collected = Vec::new();
    for complex_type in complex_types {
        collect_from_complex_type(complex_type, &mut collected);
    }
    collected
}

fn collect_from_complex_type(complex_type: &XsdComplexType, out: &mut Vec<XsdElement>) {
    for element in complex_type
        .sequence
        .iter()
        .chain(&complex_type.choice)
        .chain(&complex_type.all)
        .chain(complex_type.extension.iter().flat_map(|e| &e.sequence))
    {
        collect_from_element(element, out);
    }
}

fn collect_from_element(element: &XsdElement, out: &mut Vec<XsdElement>) {
    if element.is_ref {
        if let Some(target) = &element.ref_name {
            // Promote under the TARGET name, not the local usage name.
            let mut promoted = element.clone();
            promoted.name = target.clone();
            out.push(promoted);
        }
    }
    if let Some(nested) = &element.complex_type {
        collect_from_complex_type(nested, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Document;
    use crate::namespaces::NodeReader;
    use crate::parser::elements::parse_complex_type;

    fn complex_types(xml: &str) -> Vec<XsdComplexType> {
        let doc = Document::from_string(xml).unwrap();
        let root = doc.root.unwrap();
        let reader = NodeReader::new(Some("xs"));
        reader
            .children(&root, "complexType")
            .into_iter()
            .map(|n| parse_complex_type(n, &reader, None))
            .collect()
    }

    #[test]
    fn test_collects_refs_under_target_name() {
        let cts = complex_types(
            r#"<root>
                 <xs:complexType name="Envelope">
                   <xs:sequence>
                     <xs:element ref="tns:header"/>
                     <xs:element name="local" type="xs:string"/>
                   </xs:sequence>
                 </xs:complexType>
               </root>"#,
        );

        let refs = collect_referenced_elements(&cts);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "header");
        assert!(refs[0].is_ref);
    }

    #[test]
    fn test_recurses_into_nested_inline_types() {
        let cts = complex_types(
            r#"<root>
                 <xs:complexType name="Outer">
                   <xs:sequence>
                     <xs:element name="inner">
                       <xs:complexType>
                         <xs:sequence>
                           <xs:element ref="tns:deep"/>
                         </xs:sequence>
                       </xs:complexType>
                     </xs:element>
                   </xs:sequence>
                 </xs:complexType>
               </root>"#,
        );

        let refs = collect_referenced_elements(&cts);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].name, "deep");
    }

    #[test]
    fn test_does_not_deduplicate() {
        let cts = complex_types(
            r#"<root>
                 <xs:complexType name="A">
                   <xs:sequence><xs:element ref="tns:shared"/></xs:sequence>
                 </xs:complexType>
                 <xs:complexType name="B">
                   <xs:sequence><xs:element ref="tns:shared"/></xs:sequence>
                 </xs:complexType>
               </root>"#,
        );

        let refs = collect_referenced_elements(&cts);
        assert_eq!(refs.len(), 2);
        assert!(refs.iter().all(|e| e.name == "shared"));
    }
}
