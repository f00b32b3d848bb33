//! Note domain model.
//!
//! # Responsibility
//! - Define the single note entity shown by the widget.
//! - Provide the dummy save/remove lifecycle used in place of a backend.
//!
//! # Invariants
//! - `id` is `None` until a successful save.
//! - A saved note always carries an id `> 0`.
//! - `REMOVED_NOTE_ID` marks a removed note; it is never a saved id.
//! - Empty content is never persistable.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Integer note identifier assigned by the owning list.
pub type NoteId = i64;

/// Sentinel id for removed notes and for not-found remove payloads.
pub const REMOVED_NOTE_ID: NoteId = -1;

/// Validation failures reported by the dummy lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Content is empty and cannot be saved.
    EmptyContent,
    /// Candidate id is not a positive integer.
    InvalidId(NoteId),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note content cannot be empty"),
            Self::InvalidId(id) => write!(f, "note id must be positive, got {id}"),
        }
    }
}

impl Error for NoteValidationError {}

/// One note row.
///
/// Serialized as `{ "id": <int|null>, "content": <string> }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: Option<NoteId>,
    content: String,
}

impl Note {
    /// Creates an unsaved note.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
        }
    }

    pub fn id(&self) -> Option<NoteId> {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether this note holds a saved (positive) id.
    pub fn is_persisted(&self) -> bool {
        matches!(self.id, Some(id) if id > 0)
    }

    /// Simulates a server save by taking `candidate_id` as the stored id.
    ///
    /// # Errors
    /// - `EmptyContent` when there is nothing to save; the id is untouched.
    /// - `InvalidId` when `candidate_id` is not positive.
    pub fn save_dummy(&mut self, candidate_id: NoteId) -> Result<(), NoteValidationError> {
        if self.content.is_empty() {
            return Err(NoteValidationError::EmptyContent);
        }
        if candidate_id <= 0 {
            return Err(NoteValidationError::InvalidId(candidate_id));
        }
        self.id = Some(candidate_id);
        Ok(())
    }

    /// Simulates a server delete. Always succeeds.
    pub fn remove_dummy(&mut self) {
        self.id = Some(REMOVED_NOTE_ID);
    }
}
