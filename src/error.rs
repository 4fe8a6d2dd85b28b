//! Error types for xsd-typegen
//!
//! Only two things are allowed to fail hard: XML tokenization and I/O.
//! Every other anomaly in a schema document degrades to a warning on the
//! [`Diagnostics`](crate::diagnostics::Diagnostics) collector so that a
//! best-effort schema model is always produced.

use thiserror::Error;

/// Result type alias using the xsd-typegen Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for xsd-typegen operations
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error (the document could not be tokenized)
    #[error("XML error: {0}")]
    Xml(String),

    /// Resource loading error (unreadable file, bad path)
    #[error("resource error: {0}")]
    Resource(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error (unwritable output)
    #[error("codegen error: {0}")]
    Codegen(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
