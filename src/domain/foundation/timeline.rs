//! Timeline value object - append-only history of an aggregate.
//!
//! Entries carry a timestamp, an actor, and free text. Once appended they
//! are never mutated or deleted; reads come back in ascending chronological
//! order with a stable sort, so entries sharing a timestamp keep their
//! insertion order.

use serde::{Deserialize, Serialize};

use super::{Timestamp, ValidationError};

/// A single immutable history record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    occurred_at: Timestamp,
    actor: String,
    content: String,
}

impl TimelineEntry {
    /// Creates an entry.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` when actor or content is blank.
    pub fn new(
        occurred_at: Timestamp,
        actor: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let actor = actor.into();
        let content = content.into();
        if actor.trim().is_empty() {
            return Err(ValidationError::empty_field("actor"));
        }
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(Self {
            occurred_at,
            actor,
            content,
        })
    }

    /// Returns when the entry occurred.
    pub fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    /// Returns who performed the action.
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Returns the free-text description.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Append-only collection of timeline entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstructs a timeline from existing entries (seed data, edit mode).
    pub fn from_entries(entries: Vec<TimelineEntry>) -> Self {
        Self { entries }
    }

    /// Appends an entry. Entries are never removed or edited afterwards.
    pub fn append(&mut self, entry: TimelineEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entry has been appended.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in ascending chronological order.
    ///
    /// The sort is stable: entries with equal timestamps keep their
    /// insertion order, and sorting an already-sorted timeline is a no-op.
    pub fn chronological(&self) -> Vec<TimelineEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| e.occurred_at());
        sorted
    }

    /// Returns the most recent entry, if any.
    pub fn latest(&self) -> Option<TimelineEntry> {
        self.chronological().into_iter().next_back()
    }
}
