//! Measurement unit attached to a data reading.

use serde::{Deserialize, Serialize};

use crate::error::{EemlError, EemlResult};

/// A measurement unit, e.g. `Celsius` with symbol `C` of type `derivedSI`.
///
/// The unit type is kept as free text. EEML documents commonly use `basicSI`,
/// `derivedSI`, `conversionBasedUnits`, `derivedUnits` or `contextDependentUnits`,
/// but the value is not restricted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UnitRepr")]
pub struct Unit {
    name: String,
    symbol: Option<String>,
    unit_type: Option<String>,
}

/// Unvalidated wire shape of [`Unit`]; deserialization goes through [`Unit::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitRepr {
    name: String,
    symbol: Option<String>,
    unit_type: Option<String>,
}

impl TryFrom<UnitRepr> for Unit {
    type Error = EemlError;

    fn try_from(repr: UnitRepr) -> Result<Self, Self::Error> {
        let mut unit = Self::new(repr.name)?;
        unit.symbol = repr.symbol;
        unit.unit_type = repr.unit_type;
        Ok(unit)
    }
}

impl Unit {
    /// Create a unit with the given name.
    ///
    /// # Errors
    /// Returns [`EemlError::Validation`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> EemlResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(EemlError::validation("unit name must not be empty"));
        }
        Ok(Self {
            name,
            symbol: None,
            unit_type: None,
        })
    }

    /// Set the symbol, e.g. `C` or `m`.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the unit type, e.g. `basicSI`.
    #[must_use]
    pub fn with_unit_type(mut self, unit_type: impl Into<String>) -> Self {
        self.unit_type = Some(unit_type.into());
        self
    }

    /// The name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The symbol.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// The unit type.
    #[must_use]
    pub fn unit_type(&self) -> Option<&str> {
        self.unit_type.as_deref()
    }
}
