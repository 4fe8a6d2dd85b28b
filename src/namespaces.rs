//! XML namespace handling
//!
//! The XSD namespace URI is fixed, but the prefix a document binds to it is
//! not — `xs:`, `xsd:`, anything, or none at all. This module discovers that
//! binding on the schema root and packages it as a [`NodeReader`], the
//! prefix-aware accessor every parser component goes through instead of
//! repeating prefix-fallback conditionals at each call site.

use crate::diagnostics::{Diagnostics, Warning};
use crate::documents::Element;
use indexmap::IndexMap;

/// The XML Schema namespace URI
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Namespace declarations found on a schema root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceBindings {
    /// Mapping from prefix to namespace URI. The default namespace
    /// (`xmlns="..."`) is stored under the empty-string prefix.
    pub mappings: IndexMap<String, String>,
    /// The prefix bound to the XSD namespace URI, if any. `Some("")` means
    /// the XSD namespace is the default namespace (unprefixed tags).
    pub xsd_prefix: Option<String>,
}

/// Scan a root element's attributes for namespace declarations and infer
/// which prefix is bound to the XSD namespace.
///
/// Emits a [`Warning::MissingXsdPrefix`] when no binding is found; parsing
/// then proceeds in degraded prefix-blind mode where only unprefixed tags
/// are recognized.
pub fn extract_namespaces(root: &Element, diagnostics: &mut Diagnostics) -> NamespaceBindings {
    let mut bindings = NamespaceBindings::default();

    for (key, value) in &root.attributes {
        let prefix = if key == "xmlns" {
            Some("")
        } else {
            key.strip_prefix("xmlns:")
        };

        if let Some(prefix) = prefix {
            bindings.mappings.insert(prefix.to_string(), value.clone());
            if value == XSD_NAMESPACE && bindings.xsd_prefix.is_none() {
                bindings.xsd_prefix = Some(prefix.to_string());
            }
        }
    }

    if bindings.xsd_prefix.is_none() {
        diagnostics.warn(Warning::MissingXsdPrefix);
    }

    bindings
}

/// Strip any `prefix:` from a name.
///
/// Used everywhere a type or base reference is read so that downstream
/// comparisons are prefix-agnostic.
pub fn strip_namespace(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Prefix-aware accessor over the raw XML tree.
///
/// Parameterized once by the resolved XSD prefix; lookups match the plain
/// local name first, then the prefixed form, so the parser never needs to
/// know which shape the source document used.
#[derive(Debug, Clone)]
pub struct NodeReader {
    xsd_prefix: Option<String>,
}

impl NodeReader {
    /// Create a reader for the given resolved XSD prefix.
    ///
    /// `Some("")` (XSD as default namespace) behaves like `None` for tag
    /// matching since both mean "unprefixed tags".
    pub fn new(xsd_prefix: Option<&str>) -> Self {
        Self {
            xsd_prefix: xsd_prefix.filter(|p| !p.is_empty()).map(|p| p.to_string()),
        }
    }

    /// Build a reader from extracted namespace bindings
    pub fn from_bindings(bindings: &NamespaceBindings) -> Self {
        Self::new(bindings.xsd_prefix.as_deref())
    }

    /// Whether a raw tag name matches an XSD local name under this prefix
    fn matches(&self, raw: &str, local: &str) -> bool {
        if raw == local {
            return true;
        }
        match &self.xsd_prefix {
            Some(prefix) => raw
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|rest| rest == local)
                .unwrap_or(false),
            None => false,
        }
    }

    /// First child matching the XSD local name. An unprefixed match wins
    /// over a prefixed one regardless of document order.
    pub fn child<'a>(&self, elem: &'a Element, local: &str) -> Option<&'a Element> {
        elem.children
            .iter()
            .find(|c| c.name == local)
            .or_else(|| elem.children.iter().find(|c| self.matches(&c.name, local)))
    }

    /// All children matching the XSD local name, in document order.
    ///
    /// Always returns a sequence: empty when absent, single-element when
    /// only one child matched.
    pub fn children<'a>(&self, elem: &'a Element, local: &str) -> Vec<&'a Element> {
        elem.children
            .iter()
            .filter(|c| self.matches(&c.name, local))
            .collect()
    }

    /// Whether an element's own tag matches an XSD local name
    pub fn is(&self, elem: &Element, local: &str) -> bool {
        self.matches(&elem.name, local)
    }
}
