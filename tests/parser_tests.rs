//! Integration tests for the schema model builder
//!
//! Drives the public API on inline schema text, covering the parser's
//! tolerance rules, namespace agnosticism, and cardinality handling.

use pretty_assertions::assert_eq;
use xsd_typegen::model::MaxOccurs;
use xsd_typegen::parser::parse_xsd;
use xsd_typegen::Warning;

#[test]
fn simple_type_enumerations_and_stripped_base() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:simpleType name="S">
               <xs:restriction base="xs:string">
                 <xs:enumeration value="a"/>
                 <xs:enumeration value="b"/>
               </xs:restriction>
             </xs:simpleType>
           </xs:schema>"#,
    )
    .unwrap();

    let st = parsed.schema.find_simple_type("S").unwrap();
    assert_eq!(st.restriction.base, "string");
    assert_eq!(
        st.restriction.enumerations,
        Some(vec!["a".to_string(), "b".to_string()])
    );
}

#[test]
fn optional_field_cardinality() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="User">
               <xs:sequence>
                 <xs:element name="email" type="xs:string" minOccurs="0"/>
               </xs:sequence>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let user = parsed.schema.find_complex_type("User").unwrap();
    assert_eq!(user.content.len(), 1);
    let email = &user.content[0];
    assert_eq!(email.name, "email");
    assert_eq!(email.type_name.as_deref(), Some("string"));
    assert_eq!(email.min_occurs, Some(0));
    assert!(email.is_optional());
    assert!(!email.is_array());
}

#[test]
fn unbounded_is_a_sentinel_not_a_number() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="List">
               <xs:sequence>
                 <xs:element name="item" type="xs:string" maxOccurs="unbounded"/>
               </xs:sequence>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let list = parsed.schema.find_complex_type("List").unwrap();
    assert_eq!(list.content[0].max_occurs, Some(MaxOccurs::Unbounded));
    assert!(list.content[0].is_array());
}

#[test]
fn optional_array_combines_both_conditions() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="Bag">
               <xs:sequence>
                 <xs:element name="entry" type="xs:string" minOccurs="0" maxOccurs="3"/>
               </xs:sequence>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let entry = &parsed.schema.find_complex_type("Bag").unwrap().content[0];
    assert!(entry.is_optional());
    assert!(entry.is_array());
    assert_eq!(entry.max_occurs, Some(MaxOccurs::Bounded(3)));
}

/// The same logical schema under prefix `xs`, prefix `xsd`, and the default
/// namespace must produce structurally identical models.
#[test]
fn namespace_agnosticism() {
    let with_xs = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
             <xs:element name="root" type="xs:string"/>
             <xs:complexType name="T">
               <xs:sequence><xs:element name="f" type="xs:int"/></xs:sequence>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let with_xsd = parse_xsd(
        r#"<xsd:schema xmlns:skatt="urn:skatt"
                       xmlns:xsd="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
             <xsd:element name="root" type="xsd:string"/>
             <xsd:complexType name="T">
               <xsd:sequence><xsd:element name="f" type="xsd:int"/></xsd:sequence>
             </xsd:complexType>
           </xsd:schema>"#,
    )
    .unwrap();

    let with_default = parse_xsd(
        r#"<schema xmlns="http://www.w3.org/2001/XMLSchema" targetNamespace="urn:t">
             <element name="root" type="string"/>
             <complexType name="T">
               <sequence><element name="f" type="int"/></sequence>
             </complexType>
           </schema>"#,
    )
    .unwrap();

    assert_eq!(with_xs.schema, with_xsd.schema);
    assert_eq!(with_xs.schema, with_default.schema);
    assert!(with_xsd.diagnostics.is_empty());
}

#[test]
fn idempotent_reparse_is_deeply_equal() {
    let text = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
                    <xs:element name="doc">
                      <xs:complexType>
                        <xs:sequence>
                          <xs:element name="title" type="xs:string"/>
                          <xs:element name="line" type="xs:string" maxOccurs="unbounded"/>
                        </xs:sequence>
                        <xs:attribute name="version" type="xs:string" use="required"/>
                      </xs:complexType>
                    </xs:element>
                  </xs:schema>"#;

    let first = parse_xsd(text).unwrap();
    let second = parse_xsd(text).unwrap();
    assert_eq!(first.schema, second.schema);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn choice_nested_in_sequence() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="Payment">
               <xs:sequence>
                 <xs:element name="amount" type="xs:decimal"/>
                 <xs:choice>
                   <xs:element name="card" type="xs:string"/>
                   <xs:element name="iban" type="xs:string"/>
                 </xs:choice>
               </xs:sequence>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let payment = parsed.schema.find_complex_type("Payment").unwrap();
    assert_eq!(payment.content.len(), 2);
    assert_eq!(payment.content[0].name, "amount");
    assert_eq!(payment.content[1].name, "card");

    let alternatives: Vec<&str> = payment.choice.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(alternatives, vec!["card", "iban"]);
}

#[test]
fn round_trip_facet_fidelity() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:simpleType name="Strict">
               <xs:restriction base="xs:string">
                 <xs:minLength value="2"/>
                 <xs:maxLength value="10"/>
                 <xs:pattern value="\d{2}-\d{2}"/>
               </xs:restriction>
             </xs:simpleType>
             <xs:simpleType name="Range">
               <xs:restriction base="xs:double">
                 <xs:minExclusive value="-1.5"/>
                 <xs:maxInclusive value="99.25"/>
               </xs:restriction>
             </xs:simpleType>
           </xs:schema>"#,
    )
    .unwrap();

    let strict = &parsed.schema.find_simple_type("Strict").unwrap().restriction;
    assert_eq!(strict.min_length, Some(2));
    assert_eq!(strict.max_length, Some(10));
    assert_eq!(strict.pattern.as_deref(), Some("\\d{2}-\\d{2}"));

    let range = &parsed.schema.find_simple_type("Range").unwrap().restriction;
    assert_eq!(range.min_exclusive, Some(-1.5));
    assert_eq!(range.max_inclusive, Some(99.25));
}

#[test]
fn nillable_and_ref_flags() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:element name="header" type="xs:string" nillable="true"/>
             <xs:complexType name="Envelope">
               <xs:sequence>
                 <xs:element ref="header" minOccurs="0"/>
               </xs:sequence>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let header = parsed.schema.find_element("header").unwrap();
    assert!(header.nillable);

    let usage = &parsed.schema.find_complex_type("Envelope").unwrap().content[0];
    assert!(usage.is_ref);
    assert_eq!(usage.ref_name.as_deref(), Some("header"));

    // The ref usage was also promoted to a top-level element.
    let promoted: Vec<_> = parsed
        .schema
        .elements
        .iter()
        .filter(|e| e.name == "header")
        .collect();
    assert_eq!(promoted.len(), 2);
}

#[test]
fn degraded_mode_without_xsd_binding() {
    // No XSD namespace binding at all: prefixed tags are no longer
    // recognized, unprefixed ones still are, and a warning says so.
    let parsed = parse_xsd(
        r#"<schema>
             <element name="plain" type="string"/>
             <xs:element name="prefixed" type="xs:string"/>
           </schema>"#,
    )
    .unwrap();

    assert!(parsed
        .diagnostics
        .warnings()
        .contains(&Warning::MissingXsdPrefix));
    let names: Vec<&str> = parsed.schema.elements.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["plain"]);
}

#[test]
fn attribute_defaults_and_inline_restriction() {
    let parsed = parse_xsd(
        r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
             <xs:complexType name="Doc">
               <xs:sequence><xs:element name="body" type="xs:string"/></xs:sequence>
               <xs:attribute name="lang" type="xs:string" default="en"/>
               <xs:attribute name="kind">
                 <xs:simpleType>
                   <xs:restriction base="xs:string">
                     <xs:enumeration value="draft"/>
                     <xs:enumeration value="final"/>
                   </xs:restriction>
                 </xs:simpleType>
               </xs:attribute>
             </xs:complexType>
           </xs:schema>"#,
    )
    .unwrap();

    let doc = parsed.schema.find_complex_type("Doc").unwrap();
    let lang = &doc.attributes[0];
    assert_eq!(lang.default.as_deref(), Some("en"));
    assert!(lang.is_effectively_optional());

    let kind = &doc.attributes[1];
    let inline = kind.simple_type.as_ref().unwrap();
    assert_eq!(inline.name.as_deref(), Some("kind"));
    assert_eq!(
        inline.restriction.enumerations,
        Some(vec!["draft".to_string(), "final".to_string()])
    );
}
