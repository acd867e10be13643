//! Error types for EEML XML serialization and parsing.

use std::io;

use eeml_model::EemlError;

/// Errors that can occur during EEML serialization or parsing.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library, e.g. mismatched end tags.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// An error from quick-xml attribute handling.
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The rendered document was not valid UTF-8.
    #[error("invalid UTF-8 in XML output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A required XML element or attribute was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// An unexpected XML element was encountered.
    #[error("unexpected XML element: {0}")]
    UnexpectedElement(String),

    /// Text or attribute content could not be decoded.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// The document described an invalid model, or the model cannot be serialized.
    #[error(transparent)]
    Model(#[from] EemlError),
}

impl XmlError {
    /// Whether this error is the empty-environment precondition failure.
    #[must_use]
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::Model(EemlError::NoData))
    }
}
