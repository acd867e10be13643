//! Closed vocabularies used by EEML environments and locations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EemlError;

/// Whether a feed is still being updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The feed no longer receives updates.
    Frozen,
    /// The feed is being updated.
    Live,
}

impl Status {
    /// Returns the wire value of this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frozen => "frozen",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = EemlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frozen" => Ok(Self::Frozen),
            "live" => Ok(Self::Live),
            _ => Err(EemlError::validation("status must be frozen or live")),
        }
    }
}

/// Whether a location is a place in the world or a virtual one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// A physical place.
    Physical,
    /// A virtual place, e.g. inside a simulation.
    Virtual,
}

impl Domain {
    /// Returns the wire value of this domain.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Virtual => "virtual",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = EemlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "physical" => Ok(Self::Physical),
            "virtual" => Ok(Self::Virtual),
            _ => Err(EemlError::validation("domain must be physical or virtual")),
        }
    }
}
