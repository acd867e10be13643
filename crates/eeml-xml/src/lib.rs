//! EEML XML serialization/deserialization.
//!
//! This crate maps the [`eeml_model`] object graph to and from the EEML 005
//! XML wire format.
//!
//! # Key components
//!
//! - [`to_eeml`] / [`to_eeml_with`] for rendering an [`Environment`] as a document
//! - [`from_eeml`] / [`from_eeml_with`] for parsing a document into an [`Environment`]
//! - [`EemlDocument`] extension trait putting both on `Environment` itself
//! - [`CodecConfig`] for the root `version` attribute and parser strictness
//!
//! # EEML XML conventions
//!
//! - Namespace: `http://www.eeml.org/xsd/005`
//! - Timestamps: UTC, second precision (`2007-05-04T18:13:51Z`)
//! - Numbers: always at least one fractional digit (`48.0`)
//! - Output is a single line, no indentation
//!
//! [`Environment`]: eeml_model::Environment

mod config;
pub mod deserialize;
mod document;
pub mod error;
pub mod serialize;

pub use config::CodecConfig;
pub use deserialize::{EemlDeserialize, from_eeml, from_eeml_with};
pub use document::EemlDocument;
pub use error::XmlError;
pub use serialize::{
    EEML_NAMESPACE, EemlSerialize, SCHEMA_LOCATION, XSI_NAMESPACE, to_eeml, to_eeml_with,
};
