//! Data model for EEML (Extended Environment Markup Language) documents.
//!
//! An [`Environment`] is the root aggregate: one monitored space or feed, its
//! metadata, an optional [`Location`], and an ordered list of [`Data`] readings.
//! Each reading may carry a [`Unit`].
//!
//! The types in this crate are plain value holders. Converting them to and from
//! the EEML XML wire format lives in the `eeml-xml` crate.

mod data;
mod environment;
mod error;
mod location;
mod types;
mod unit;

pub use data::Data;
pub use environment::Environment;
pub use error::{EemlError, EemlResult};
pub use location::Location;
pub use types::{Domain, Status};
pub use unit::Unit;
