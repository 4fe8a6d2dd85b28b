//! Structured parse diagnostics
//!
//! The schema parser never prints; every non-fatal anomaly is recorded on a
//! [`Diagnostics`] value returned alongside the schema. Callers (the CLI,
//! tests) decide whether to display, ignore, or assert on the warnings.

use std::fmt;

/// A non-fatal anomaly encountered while building or ordering a schema model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// No prefix on the schema root is bound to the XSD namespace URI;
    /// parsing continues in prefix-blind mode and will only recognize
    /// unprefixed tags.
    MissingXsdPrefix,

    /// No `schema` element was found; the document root is used as-is.
    MissingSchemaRoot,

    /// More than one `schema` candidate was found; the first was used.
    AmbiguousSchemaRoot {
        /// Number of candidates encountered
        count: usize,
    },

    /// A type participates in a dependency cycle; the sort truncated that
    /// branch and the emitted code may contain a forward reference.
    CircularReference {
        /// Name of the type at which the cycle was detected
        type_name: String,
    },

    /// A child of the schema root had an unrecognized tag and was skipped.
    UnrecognizedSchemaChild {
        /// Local name of the skipped tag
        tag: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingXsdPrefix => write!(
                f,
                "no prefix is bound to the XSD namespace; only unprefixed tags will be recognized"
            ),
            Warning::MissingSchemaRoot => {
                write!(f, "no 'schema' element found; using document root")
            }
            Warning::AmbiguousSchemaRoot { count } => {
                write!(f, "{} 'schema' candidates found; using the first", count)
            }
            Warning::CircularReference { type_name } => {
                write!(f, "circular type dependency detected at '{}'", type_name)
            }
            Warning::UnrecognizedSchemaChild { tag } => {
                write!(f, "skipped unrecognized schema child element '{}'", tag)
            }
        }
    }
}

/// Ordered collection of warnings produced during one parse/sort run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning
    pub fn warn(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// All recorded warnings, in order of occurrence
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Whether no warnings were recorded
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Whether any recorded warning is a circular-reference warning
    pub fn has_cycles(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w, Warning::CircularReference { .. }))
    }

    /// Merge another collector's warnings into this one
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }
}
