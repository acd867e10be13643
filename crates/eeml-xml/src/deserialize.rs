//! EEML XML deserialization: parsing an EEML document into an environment.
//!
//! This module provides the [`EemlDeserialize`] trait and implementations for the
//! model types. Elements and attributes are looked up by name, so their order
//! in the document does not matter. Optional elements that are absent leave the
//! corresponding field unset.

use chrono::{DateTime, Utc};
use eeml_model::{Data, EemlError, Environment, Location, Unit};
use quick_xml::Reader;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace, warn};

use crate::config::CodecConfig;
use crate::error::XmlError;

/// Trait for deserializing EEML model types from XML.
///
/// The opening tag of the element has already been consumed by the caller and is
/// passed in so its attributes can be read. The implementation reads all child
/// content and returns once the matching end tag is consumed.
pub trait EemlDeserialize: Sized {
    /// Deserialize an instance from the element starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed, required content is missing,
    /// or a value violates the model's validation rules.
    fn deserialize_xml(
        start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
        config: &CodecConfig,
    ) -> Result<Self, XmlError>;
}

/// Parse an EEML document with the default (lenient) configuration.
///
/// # Errors
///
/// Returns `XmlError` if the document is malformed or does not describe a valid
/// environment.
pub fn from_eeml(text: &str) -> Result<Environment, XmlError> {
    from_eeml_with(text, &CodecConfig::default())
}

/// Parse an EEML document.
///
/// # Errors
///
/// Returns `XmlError` if the document is malformed, has no `eeml` root or
/// `environment` element, or describes an invalid environment. No partially
/// populated environment is ever returned.
pub fn from_eeml_with(text: &str, config: &CodecConfig) -> Result<Environment, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().expand_empty_elements = true;

    // Skip the XML declaration and find the root element.
    let env = loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                if name != "eeml" {
                    return Err(XmlError::UnexpectedElement(format!(
                        "{name} (expected eeml root)"
                    )));
                }
                break read_root(&mut reader, config)?;
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("eeml".to_owned()));
            }
            // Declaration, comments and processing instructions are skipped.
            other => reject_stray_content(&other, "before eeml root")?,
        }
    };

    // Only comments and whitespace may follow the root element.
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                return Err(XmlError::UnexpectedElement(format!(
                    "{} after eeml root",
                    local_name(&e)?
                )));
            }
            Event::Eof => break,
            other => reject_stray_content(&other, "after eeml root")?,
        }
    }

    debug!(data_items = env.len(), bytes = text.len(), "parsed EEML environment");
    Ok(env)
}

/// Read the children of the `eeml` root and return its single environment.
fn read_root(reader: &mut Reader<&[u8]>, config: &CodecConfig) -> Result<Environment, XmlError> {
    let mut env = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e)?;
                if name == "environment" {
                    if env.is_some() {
                        return Err(XmlError::UnexpectedElement(
                            "second environment in eeml".to_owned(),
                        ));
                    }
                    env = Some(Environment::deserialize_xml(&e, reader, config)?);
                } else {
                    skip_unknown(reader, "eeml", &name, config)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in eeml".to_owned(),
                ));
            }
            other => reject_stray_content(&other, "in eeml")?,
        }
    }

    env.ok_or_else(|| XmlError::MissingElement("environment".to_owned()))
}

// ---------------------------------------------------------------------------
// Helper functions for reading common XML patterns
// ---------------------------------------------------------------------------

/// Local (unprefixed) name of an element.
fn local_name(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let name = start.local_name();
    std::str::from_utf8(name.as_ref())
        .map(str::to_owned)
        .map_err(|e| XmlError::ParseError(e.to_string()))
}

/// Decoded and unescaped value of an attribute.
fn attribute_value(attr: &Attribute<'_>) -> Result<String, XmlError> {
    let raw = std::str::from_utf8(attr.value.as_ref())
        .map_err(|e| XmlError::ParseError(e.to_string()))?;
    let unescaped =
        quick_xml::escape::unescape(raw).map_err(|e| XmlError::ParseError(e.to_string()))?;
    Ok(unescaped.into_owned())
}

/// Read the text content of the current element and consume its end tag.
///
/// Entity and character references are resolved; CDATA sections are taken
/// verbatim. Child elements are not allowed.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&decoded);
            }
            Event::GeneralRef(e) => {
                let name = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let reference = format!("&{name};");
                let resolved = quick_xml::escape::unescape(&reference)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&resolved);
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let decoded = std::str::from_utf8(raw.as_ref())
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(decoded);
            }
            Event::Start(e) => {
                return Err(XmlError::UnexpectedElement(format!(
                    "{} inside text content",
                    local_name(&e)?
                )));
            }
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Reject character data where only child elements are allowed.
///
/// Whitespace between elements is fine; anything else makes the document
/// malformed for EEML purposes.
fn reject_stray_content(event: &Event<'_>, context: &str) -> Result<(), XmlError> {
    match event {
        Event::Text(e) => {
            let decoded = e
                .decode()
                .map_err(|err| XmlError::ParseError(err.to_string()))?;
            let trimmed = decoded.trim();
            if trimmed.is_empty() {
                Ok(())
            } else {
                Err(XmlError::ParseError(format!(
                    "unexpected text {trimmed:?} {context}"
                )))
            }
        }
        Event::GeneralRef(_) | Event::CData(_) => Err(XmlError::ParseError(format!(
            "unexpected character data {context}"
        ))),
        _ => Ok(()),
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip an element the EEML vocabulary does not define, or reject it in strict mode.
fn skip_unknown(
    reader: &mut Reader<&[u8]>,
    parent: &str,
    name: &str,
    config: &CodecConfig,
) -> Result<(), XmlError> {
    if config.strict {
        return Err(XmlError::UnexpectedElement(format!("{name} in {parent}")));
    }
    warn!(element = name, parent, "skipping unknown EEML element");
    skip_element(reader)
}

/// Parse a floating-point number from XML text.
fn parse_number(field: &'static str, s: &str) -> Result<f64, XmlError> {
    s.trim().parse::<f64>().map_err(|_| {
        XmlError::Model(EemlError::TypeMismatch {
            field,
            expected: "a number",
            found: s.to_owned(),
        })
    })
}

/// Parse an ISO 8601 timestamp from XML text.
fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, XmlError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                .map(|ndt| ndt.and_utc())
        })
        .map_err(|_| {
            XmlError::Model(EemlError::TypeMismatch {
                field: "updated_at",
                expected: "a timestamp",
                found: s.to_owned(),
            })
        })
}

// ---------------------------------------------------------------------------
// EemlDeserialize implementations
// ---------------------------------------------------------------------------

impl EemlDeserialize for Environment {
    fn deserialize_xml(
        start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
        config: &CodecConfig,
    ) -> Result<Self, XmlError> {
        let mut env = Environment::new();

        for attr in start.attributes() {
            let attr = attr?;
            let value = attribute_value(&attr)?;
            match attr.key.as_ref() {
                b"updated" => env.set_updated_at(parse_timestamp(&value)?),
                b"creator" => env.set_creator(value),
                b"id" => env.set_id(value),
                _ => {}
            }
        }

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = local_name(&e)?;
                    trace!(element = %name, "reading environment child");
                    match name.as_str() {
                        "title" => env.set_title(read_text_content(reader)?),
                        "feed" => env.set_feed(read_text_content(reader)?),
                        "status" => {
                            let text = read_text_content(reader)?;
                            env.set_status_str(text.trim())?;
                        }
                        "description" => env.set_description(read_text_content(reader)?),
                        "icon" => env.set_icon(read_text_content(reader)?),
                        "website" => env.set_website(read_text_content(reader)?),
                        "email" => env.set_email(read_text_content(reader)?),
                        "location" => {
                            env.set_location(Location::deserialize_xml(&e, reader, config)?);
                        }
                        "data" => env.push(Data::deserialize_xml(&e, reader, config)?),
                        _ => skip_unknown(reader, "environment", &name, config)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in environment".to_string(),
                    ));
                }
                other => reject_stray_content(&other, "in environment")?,
            }
        }

        Ok(env)
    }
}

impl EemlDeserialize for Location {
    fn deserialize_xml(
        start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
        config: &CodecConfig,
    ) -> Result<Self, XmlError> {
        let mut domain = None;
        let mut exposure = None;
        let mut disposition = None;

        for attr in start.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"domain" => domain = Some(attribute_value(&attr)?),
                b"exposure" => exposure = Some(attribute_value(&attr)?),
                b"disposition" => disposition = Some(attribute_value(&attr)?),
                _ => {}
            }
        }

        let domain = domain
            .ok_or_else(|| XmlError::MissingElement("domain attribute on location".to_owned()))?;
        let mut location = Location::parse(&domain)?;
        if let Some(exposure) = exposure {
            location = location.with_exposure(exposure);
        }
        if let Some(disposition) = disposition {
            location = location.with_disposition(disposition);
        }

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = local_name(&e)?;
                    match name.as_str() {
                        "name" => location = location.with_name(read_text_content(reader)?),
                        "lat" => {
                            let text = read_text_content(reader)?;
                            location = location.with_lat(parse_number("lat", &text)?);
                        }
                        "lon" => {
                            let text = read_text_content(reader)?;
                            location = location.with_lon(parse_number("lon", &text)?);
                        }
                        "ele" => {
                            let text = read_text_content(reader)?;
                            location = location.with_ele(parse_number("ele", &text)?);
                        }
                        _ => skip_unknown(reader, "location", &name, config)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in location".to_string(),
                    ));
                }
                other => reject_stray_content(&other, "in location")?,
            }
        }

        Ok(location)
    }
}

impl EemlDeserialize for Data {
    fn deserialize_xml(
        start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
        config: &CodecConfig,
    ) -> Result<Self, XmlError> {
        let mut id = None;
        for attr in start.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"id" {
                id = Some(attribute_value(&attr)?);
            }
        }

        let mut tags = Vec::new();
        let mut value = None;
        let mut max_value = None;
        let mut min_value = None;
        let mut unit = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    let name = local_name(&e)?;
                    match name.as_str() {
                        "tag" => tags.push(read_text_content(reader)?),
                        "value" => {
                            for attr in e.attributes() {
                                let attr = attr?;
                                match attr.key.as_ref() {
                                    b"maxValue" => {
                                        let text = attribute_value(&attr)?;
                                        max_value = Some(parse_number("max_value", &text)?);
                                    }
                                    b"minValue" => {
                                        let text = attribute_value(&attr)?;
                                        min_value = Some(parse_number("min_value", &text)?);
                                    }
                                    _ => {}
                                }
                            }
                            let text = read_text_content(reader)?;
                            value = Some(parse_number("value", &text)?);
                        }
                        "unit" => unit = Some(Unit::deserialize_xml(&e, reader, config)?),
                        _ => skip_unknown(reader, "data", &name, config)?,
                    }
                }
                Event::End(_) => break,
                Event::Eof => {
                    return Err(XmlError::UnexpectedElement(
                        "unexpected EOF in data".to_string(),
                    ));
                }
                other => reject_stray_content(&other, "in data")?,
            }
        }

        let value = value.ok_or_else(|| XmlError::MissingElement("value in data".to_owned()))?;
        let mut data = Data::new(value);
        data.set_id(id);
        data.tags_mut().extend(tags);
        data.set_max_value(max_value);
        data.set_min_value(min_value);
        data.set_unit(unit);
        Ok(data)
    }
}

impl EemlDeserialize for Unit {
    fn deserialize_xml(
        start: &BytesStart<'_>,
        reader: &mut Reader<&[u8]>,
        _config: &CodecConfig,
    ) -> Result<Self, XmlError> {
        let mut unit_type = None;
        let mut symbol = None;
        for attr in start.attributes() {
            let attr = attr?;
            match attr.key.as_ref() {
                b"type" => unit_type = Some(attribute_value(&attr)?),
                b"symbol" => symbol = Some(attribute_value(&attr)?),
                _ => {}
            }
        }

        let mut unit = Unit::new(read_text_content(reader)?)?;
        if let Some(unit_type) = unit_type {
            unit = unit.with_unit_type(unit_type);
        }
        if let Some(symbol) = symbol {
            unit = unit.with_symbol(symbol);
        }
        Ok(unit)
    }
}
