//! A single sensor reading.

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// One reading inside an environment.
///
/// When `id` is unset, serializers fall back to the reading's position in its
/// environment at the time of serialization; no id is stored on append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    value: f64,
    id: Option<String>,
    tags: Vec<String>,
    max_value: Option<f64>,
    min_value: Option<f64>,
    unit: Option<Unit>,
}

impl Data {
    /// Create a reading with no id, tags, bounds or unit.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            id: None,
            tags: Vec::new(),
            max_value: None,
            min_value: None,
            unit: None,
        }
    }

    /// Create a reading with an explicit id.
    ///
    /// Ids are kept in their textual form, so `42` and `"42"` are the same id.
    #[must_use]
    pub fn with_id(value: f64, id: impl ToString) -> Self {
        let mut data = Self::new(value);
        data.id = Some(id.to_string());
        data
    }

    /// The reading.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value.
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// The id.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the id.
    pub fn set_id(&mut self, id: Option<impl ToString>) {
        self.id = id.map(|id| id.to_string());
    }

    /// Tags in insertion order. Duplicates are kept.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Mutable access to the tag list.
    pub fn tags_mut(&mut self) -> &mut Vec<String> {
        &mut self.tags
    }

    /// Append a tag.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// The max value.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.max_value
    }

    /// Set the max value.
    pub fn set_max_value(&mut self, max_value: Option<f64>) {
        self.max_value = max_value;
    }

    /// The min value.
    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        self.min_value
    }

    /// Set the min value.
    pub fn set_min_value(&mut self, min_value: Option<f64>) {
        self.min_value = min_value;
    }

    /// The unit.
    #[must_use]
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Set the unit.
    pub fn set_unit(&mut self, unit: Option<Unit>) {
        self.unit = unit;
    }

    /// Append a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.add_tag(tag);
        self
    }

    /// Set the max value.
    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }

    /// Set the min value.
    #[must_use]
    pub fn with_min_value(mut self, min_value: f64) -> Self {
        self.min_value = Some(min_value);
        self
    }

    /// Set the unit.
    #[must_use]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }
}
