//! The root aggregate of an EEML document.

use std::ops::{Index, IndexMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::data::Data;
use crate::error::{EemlError, EemlResult};
use crate::location::Location;
use crate::types::Status;

/// One monitored space or feed and its current readings.
///
/// An environment may be empty while it is being built; the data list must
/// hold at least one reading before it can be serialized (see
/// [`Environment::ensure_has_data`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    data: Vec<Data>,
    title: Option<String>,
    feed: Option<String>,
    status: Option<Status>,
    description: Option<String>,
    icon: Option<String>,
    website: Option<String>,
    email: Option<String>,
    location: Option<Location>,
    updated_at: Option<DateTime<Utc>>,
    creator: Option<String>,
    id: Option<String>,
}

impl Environment {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Data items
    // -----------------------------------------------------------------------

    /// Append a reading. Insertion order is serialization order.
    pub fn push(&mut self, data: Data) {
        self.data.push(data);
    }

    /// Remove and return the reading at `index`, shifting later readings down.
    ///
    /// Readings without an explicit id are renumbered accordingly on the next
    /// serialization.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, like [`Vec::remove`].
    pub fn remove(&mut self, index: usize) -> Data {
        self.data.remove(index)
    }

    /// Number of readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there are no readings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reading at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Data> {
        self.data.get(index)
    }

    /// Mutable reading at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Data> {
        self.data.get_mut(index)
    }

    /// Readings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Data> {
        self.data.iter()
    }

    /// Mutable readings in insertion order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Data> {
        self.data.iter_mut()
    }

    /// Fails with [`EemlError::NoData`] when there are no readings.
    ///
    /// # Errors
    /// Returns [`EemlError::NoData`] for an empty environment.
    pub fn ensure_has_data(&self) -> EemlResult<()> {
        if self.data.is_empty() {
            return Err(EemlError::NoData);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Metadata
    // -----------------------------------------------------------------------

    /// The title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// URL of the feed this document describes.
    #[must_use]
    pub fn feed(&self) -> Option<&str> {
        self.feed.as_deref()
    }

    /// Set the feed.
    pub fn set_feed(&mut self, feed: impl Into<String>) {
        self.feed = Some(feed.into());
    }

    /// The status.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }

    /// Set the status.
    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    /// Set the status from its wire literal.
    ///
    /// # Errors
    /// Returns a validation error unless `status` is `frozen` or `live`. The
    /// previous status is left untouched on failure.
    pub fn set_status_str(&mut self, status: &str) -> EemlResult<()> {
        let parsed = status.parse::<Status>().inspect_err(|e| {
            debug!(status, error = %e, "rejected environment status");
        })?;
        self.status = Some(parsed);
        Ok(())
    }

    /// The description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// The icon.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Set the icon.
    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
    }

    /// The website.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Set the website.
    pub fn set_website(&mut self, website: impl Into<String>) {
        self.website = Some(website.into());
    }

    /// The email.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Set the email.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    /// The location.
    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    /// Set the location.
    pub fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    /// Time of the last update.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Set the time of the last update.
    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = Some(updated_at);
    }

    /// Set `updated_at` from an RFC 3339 timestamp such as `2007-05-04T18:13:51Z`.
    ///
    /// # Errors
    /// Returns [`EemlError::TypeMismatch`] if the text is not a timestamp.
    pub fn set_updated_at_str(&mut self, updated_at: &str) -> EemlResult<()> {
        let parsed = DateTime::parse_from_rfc3339(updated_at).map_err(|_| {
            EemlError::TypeMismatch {
                field: "updated_at",
                expected: "a timestamp",
                found: updated_at.to_owned(),
            }
        })?;
        self.updated_at = Some(parsed.with_timezone(&Utc));
        Ok(())
    }

    /// Stamp the environment with the current wall-clock time.
    pub fn set_updated_now(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    /// The creator.
    #[must_use]
    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// Set the creator.
    pub fn set_creator(&mut self, creator: impl Into<String>) {
        self.creator = Some(creator.into());
    }

    /// Environment id, kept in textual form.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set the id.
    pub fn set_id(&mut self, id: impl ToString) {
        self.id = Some(id.to_string());
    }
}

impl Index<usize> for Environment {
    type Output = Data;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Environment {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = &'a Data;
    type IntoIter = std::slice::Iter<'a, Data>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Extend<Data> for Environment {
    fn extend<T: IntoIterator<Item = Data>>(&mut self, iter: T) {
        self.data.extend(iter);
    }
}
