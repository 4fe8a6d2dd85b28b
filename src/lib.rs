//! # xsd-typegen
//!
//! Translates XML Schema Definition (XSD) documents into TypeScript type
//! declarations and corresponding runtime validators.
//!
//! The heart of the crate is the schema model builder: it parses raw XSD
//! markup into a normalized in-memory [`Schema`](model::Schema) graph,
//! resolves namespace-prefixed names, collapses equivalent XML shapes into
//! one canonical representation, and orders type definitions so dependent
//! types are emitted after their dependencies.
//!
//! ## Example
//!
//! ```rust
//! use xsd_typegen::codegen::{declarations, NamingConvention};
//! use xsd_typegen::parser::parse_xsd;
//!
//! let parsed = parse_xsd(
//!     r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
//!          <xs:complexType name="User">
//!            <xs:sequence>
//!              <xs:element name="email" type="xs:string" minOccurs="0"/>
//!            </xs:sequence>
//!          </xs:complexType>
//!        </xs:schema>"#,
//! )?;
//!
//! let mut diagnostics = parsed.diagnostics;
//! let schema = parsed.schema.sorted(&mut diagnostics);
//! let ts = declarations::emit_declarations(&schema, NamingConvention::Camel);
//! assert!(ts.contains("email?: string;"));
//! # Ok::<(), xsd_typegen::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Foundation
pub mod diagnostics;
pub mod error;

// XML layer and namespace resolution
pub mod documents;
pub mod namespaces;

// Schema model and building
pub mod model;
pub mod ordering;
pub mod parser;

// Emission
pub mod codegen;

// I/O edge
pub mod loaders;

// Re-exports for convenience
pub use codegen::NamingConvention;
pub use diagnostics::{Diagnostics, Warning};
pub use error::{Error, Result};
pub use model::Schema;
pub use parser::{parse_xsd, ParsedSchema};

/// Version of the xsd-typegen library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// XSD namespace URI
pub const XSD_NAMESPACE: &str = namespaces::XSD_NAMESPACE;
