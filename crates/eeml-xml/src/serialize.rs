//! EEML XML serialization: rendering an environment as an EEML 005 document.
//!
//! This module provides the [`EemlSerialize`] trait and implementations for the
//! model types. Attribute and child order is fixed:
//!
//! - `environment`: attributes `updated`, `creator`, `id`; children `title`, `feed`,
//!   `status`, `description`, `icon`, `website`, `email`, `location`, then `data`*
//! - `location`: attributes `domain`, `exposure`, `disposition`; children `name`,
//!   `lat`, `lon`, `ele`
//! - `data`: attribute `id`; children `tag`*, `value`, `unit`
//!
//! Unset optional fields are omitted entirely.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use eeml_model::{Data, Environment, Location, Unit};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};
use tracing::debug;

use crate::config::CodecConfig;
use crate::error::XmlError;

/// The EEML 005 XML namespace.
pub const EEML_NAMESPACE: &str = "http://www.eeml.org/xsd/005";

/// The XML Schema instance namespace.
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Value of the `xsi:schemaLocation` attribute on the root element.
pub const SCHEMA_LOCATION: &str = "http://www.eeml.org/xsd/005 http://www.eeml.org/xsd/005/005.xsd";

/// Trait for serializing EEML model types to XML.
///
/// Implementors write their own element (including its attributes) into the
/// writer. The document preamble and root element are handled by [`to_eeml_with`].
///
/// Uses `io::Result` because `quick_xml::Writer` closures require `io::Result<()>`.
pub trait EemlSerialize {
    /// Serialize this value as an XML element into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Render an environment as an EEML document.
///
/// `version`, when given, becomes the `version` attribute of the root element.
///
/// # Errors
///
/// Returns [`XmlError::Model`] wrapping `NoData` if the environment has no readings.
pub fn to_eeml(env: &Environment, version: Option<&str>) -> Result<String, XmlError> {
    let config = CodecConfig {
        version: version.map(str::to_owned),
        ..CodecConfig::default()
    };
    to_eeml_with(env, &config)
}

/// Render an environment as an EEML document using the given configuration.
///
/// Produces a single-line document with:
/// - XML declaration (`<?xml version="1.0" encoding="UTF-8"?>`)
/// - Root `eeml` element: optional `version`, then the namespace and schema location
/// - One `environment` element
///
/// # Errors
///
/// Returns [`XmlError::Model`] wrapping `NoData` if the environment has no readings,
/// or an I/O error if writing fails.
pub fn to_eeml_with(env: &Environment, config: &CodecConfig) -> Result<String, XmlError> {
    env.ensure_has_data()?;

    let mut buf = Vec::with_capacity(512);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = writer.create_element("eeml");
    if let Some(version) = config.version.as_deref() {
        root = root.with_attribute(("version", version));
    }
    root.with_attribute(("xmlns:xsi", XSI_NAMESPACE))
        .with_attribute(("xmlns", EEML_NAMESPACE))
        .with_attribute(("xsi:schemaLocation", SCHEMA_LOCATION))
        .write_inner_content(|w| env.serialize_xml(w))?;

    let xml = String::from_utf8(buf)?;
    debug!(
        data_items = env.len(),
        bytes = xml.len(),
        version = config.version.as_deref(),
        "serialized EEML environment"
    );
    Ok(xml)
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` only if the value is `Some`.
fn write_optional_text<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>number</tag>` only if the value is `Some`.
fn write_optional_number<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<f64>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_text_element(writer, tag, &format_number(v))?;
    }
    Ok(())
}

/// Format a number with at least one fractional digit (`48` becomes `48.0`).
pub(crate) fn format_number(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Format a `DateTime<Utc>` as ISO 8601 with second precision and `Z` suffix.
pub(crate) fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

// ---------------------------------------------------------------------------
// EemlSerialize implementations
// ---------------------------------------------------------------------------

impl EemlSerialize for Environment {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let updated = self.updated_at().as_ref().map(format_timestamp);

        let mut element = writer.create_element("environment");
        if let Some(ref updated) = updated {
            element = element.with_attribute(("updated", updated.as_str()));
        }
        if let Some(creator) = self.creator() {
            element = element.with_attribute(("creator", creator));
        }
        if let Some(id) = self.id() {
            element = element.with_attribute(("id", id));
        }

        element.write_inner_content(|w| {
            write_optional_text(w, "title", self.title())?;
            write_optional_text(w, "feed", self.feed())?;
            write_optional_text(w, "status", self.status().map(|s| s.as_str()))?;
            write_optional_text(w, "description", self.description())?;
            write_optional_text(w, "icon", self.icon())?;
            write_optional_text(w, "website", self.website())?;
            write_optional_text(w, "email", self.email())?;
            if let Some(location) = self.location() {
                location.serialize_xml(w)?;
            }
            for (position, data) in self.iter().enumerate() {
                write_data(w, data, position)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl EemlSerialize for Location {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let mut element = writer
            .create_element("location")
            .with_attribute(("domain", self.domain().as_str()));
        if let Some(exposure) = self.exposure() {
            element = element.with_attribute(("exposure", exposure));
        }
        if let Some(disposition) = self.disposition() {
            element = element.with_attribute(("disposition", disposition));
        }

        element.write_inner_content(|w| {
            write_optional_text(w, "name", self.name())?;
            write_optional_number(w, "lat", self.lat())?;
            write_optional_number(w, "lon", self.lon())?;
            write_optional_number(w, "ele", self.ele())?;
            Ok(())
        })?;
        Ok(())
    }
}

impl EemlSerialize for Unit {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        let mut element = writer.create_element("unit");
        if let Some(unit_type) = self.unit_type() {
            element = element.with_attribute(("type", unit_type));
        }
        if let Some(symbol) = self.symbol() {
            element = element.with_attribute(("symbol", symbol));
        }
        element.write_text_content(BytesText::new(self.name()))?;
        Ok(())
    }
}

/// Write one `data` element. Readings without an id use their position.
fn write_data<W: Write>(writer: &mut Writer<W>, data: &Data, position: usize) -> io::Result<()> {
    let fallback_id;
    let id = match data.id() {
        Some(id) => id,
        None => {
            fallback_id = position.to_string();
            fallback_id.as_str()
        }
    };

    writer
        .create_element("data")
        .with_attribute(("id", id))
        .write_inner_content(|w| {
            for tag in data.tags() {
                write_text_element(w, "tag", tag)?;
            }
            write_value(w, data)?;
            if let Some(unit) = data.unit() {
                unit.serialize_xml(w)?;
            }
            Ok(())
        })?;
    Ok(())
}

/// Write the `value` element with its optional `maxValue` / `minValue` bounds.
fn write_value<W: Write>(writer: &mut Writer<W>, data: &Data) -> io::Result<()> {
    let max_value = data.max_value().map(format_number);
    let min_value = data.min_value().map(format_number);

    let mut element = writer.create_element("value");
    if let Some(ref max) = max_value {
        element = element.with_attribute(("maxValue", max.as_str()));
    }
    if let Some(ref min) = min_value {
        element = element.with_attribute(("minValue", min.as_str()));
    }
    element.write_text_content(BytesText::new(&format_number(data.value())))?;
    Ok(())
}
