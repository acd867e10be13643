//! `to_eeml` / `from_eeml` as methods on [`Environment`].

use eeml_model::Environment;

use crate::error::XmlError;

/// Extension trait giving an environment its EEML document form.
///
/// ```
/// use eeml_model::{Data, Environment};
/// use eeml_xml::EemlDocument;
///
/// let mut env = Environment::new();
/// env.push(Data::new(36.2));
/// let xml = env.to_eeml(None).unwrap();
/// let parsed = Environment::from_eeml(&xml).unwrap();
/// assert_eq!(parsed.len(), 1);
/// ```
pub trait EemlDocument: Sized {
    /// Render as an EEML document, optionally with a root `version` attribute.
    ///
    /// # Errors
    ///
    /// Fails with `NoData` when there are no readings.
    fn to_eeml(&self, version: Option<&str>) -> Result<String, XmlError>;

    /// Parse an EEML document.
    ///
    /// # Errors
    ///
    /// Fails on malformed XML or an invalid environment description.
    fn from_eeml(text: &str) -> Result<Self, XmlError>;
}

impl EemlDocument for Environment {
    fn to_eeml(&self, version: Option<&str>) -> Result<String, XmlError> {
        crate::serialize::to_eeml(self, version)
    }

    fn from_eeml(text: &str) -> Result<Self, XmlError> {
        crate::deserialize::from_eeml(text)
    }
}
