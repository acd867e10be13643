//! Physical or virtual placement of an environment.

use serde::{Deserialize, Serialize};

use crate::error::EemlResult;
use crate::types::Domain;

/// Where an environment is.
///
/// Only the domain is required. Exposure (e.g. `indoor`) and disposition
/// (e.g. `fixed`, `mobile`) are free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    domain: Domain,
    exposure: Option<String>,
    disposition: Option<String>,
    name: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    ele: Option<f64>,
}

impl Location {
    /// Create a location in the given domain with every optional field unset.
    #[must_use]
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            exposure: None,
            disposition: None,
            name: None,
            lat: None,
            lon: None,
            ele: None,
        }
    }

    /// Create a location from the textual domain (`physical` or `virtual`).
    ///
    /// # Errors
    /// Returns a validation error for any other domain literal.
    pub fn parse(domain: &str) -> EemlResult<Self> {
        Ok(Self::new(domain.parse()?))
    }

    /// Set the exposure.
    #[must_use]
    pub fn with_exposure(mut self, exposure: impl Into<String>) -> Self {
        self.exposure = Some(exposure.into());
        self
    }

    /// Set the disposition.
    #[must_use]
    pub fn with_disposition(mut self, disposition: impl Into<String>) -> Self {
        self.disposition = Some(disposition.into());
        self
    }

    /// Set the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the latitude.
    #[must_use]
    pub fn with_lat(mut self, lat: f64) -> Self {
        self.lat = Some(lat);
        self
    }

    /// Set the longitude.
    #[must_use]
    pub fn with_lon(mut self, lon: f64) -> Self {
        self.lon = Some(lon);
        self
    }

    /// Set the elevation.
    #[must_use]
    pub fn with_ele(mut self, ele: f64) -> Self {
        self.ele = Some(ele);
        self
    }

    /// The domain.
    #[must_use]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The exposure.
    #[must_use]
    pub fn exposure(&self) -> Option<&str> {
        self.exposure.as_deref()
    }

    /// The disposition.
    #[must_use]
    pub fn disposition(&self) -> Option<&str> {
        self.disposition.as_deref()
    }

    /// The name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Latitude.
    #[must_use]
    pub fn lat(&self) -> Option<f64> {
        self.lat
    }

    /// Longitude.
    #[must_use]
    pub fn lon(&self) -> Option<f64> {
        self.lon
    }

    /// Elevation.
    #[must_use]
    pub fn ele(&self) -> Option<f64> {
        self.ele
    }
}
