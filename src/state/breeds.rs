//! Breed records and the in-memory repository that owns them.
//!
//! DESIGN
//! ======
//! Records are addressed by their 1-based `id`. Every single-record mutation
//! reports whether a record matched; an unknown id is a silent no-op so late
//! async results for a replaced list cannot fault the UI.

#[cfg(test)]
#[path = "breeds_test.rs"]
mod breeds_test;

use crate::config::MAX_BREEDS;

/// Stable identifier of a record within one list snapshot.
pub type BreedId = u32;

/// One breed's display and interaction state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreedRecord {
    pub id: BreedId,
    /// Lowercase breed identifier, also used in API paths.
    pub name: String,
    /// URL of the image currently shown.
    pub image: String,
    pub likes: u32,
    /// Message from the last failed image fetch, if any.
    pub error: Option<String>,
}

impl BreedRecord {
    pub fn new(id: BreedId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self { id, name: name.into(), image: image.into(), likes: 0, error: None }
    }

    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Case-insensitive substring match against the breed name.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Ordered collection of breed records, capped at `MAX_BREEDS`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreedRepository {
    records: Vec<BreedRecord>,
}

impl BreedRepository {
    /// Build a repository from a freshly loaded list, dropping anything past the cap.
    pub fn from_records(mut records: Vec<BreedRecord>) -> Self {
        records.truncate(MAX_BREEDS);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BreedRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: BreedId) -> Option<&BreedRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose name contains `query`, in list order. An empty query
    /// matches everything.
    pub fn filter<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a BreedRecord> + 'a {
        self.records.iter().filter(move |r| r.matches(query))
    }

    pub fn set_image(&mut self, id: BreedId, image: impl Into<String>) -> bool {
        self.with_record(id, |r| r.image = image.into())
    }

    pub fn set_error(&mut self, id: BreedId, message: impl Into<String>) -> bool {
        self.with_record(id, |r| r.error = Some(message.into()))
    }

    pub fn clear_error(&mut self, id: BreedId) -> bool {
        self.with_record(id, |r| r.error = None)
    }

    pub fn increment_likes(&mut self, id: BreedId) -> bool {
        self.with_record(id, |r| r.likes = r.likes.saturating_add(1))
    }

    pub fn reset_likes(&mut self, id: BreedId) -> bool {
        self.with_record(id, |r| r.likes = 0)
    }

    fn with_record(&mut self, id: BreedId, apply: impl FnOnce(&mut BreedRecord)) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }
}
