//! Events broadcast by `NoteList`.
//!
//! # Invariants
//! - `NoteAdd` fires for both successful and rejected adds; the payload
//!   note's id tells them apart.
//! - `NoteRemove` carries `REMOVED_NOTE_ID` when nothing was removed.

use crate::model::note::{Note, NoteId, REMOVED_NOTE_ID};
use serde::Serialize;

/// Closed set of list events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteEventKind {
    NoteAdd,
    NoteRemove,
}

impl NoteEventKind {
    pub const ALL: [NoteEventKind; 2] = [NoteEventKind::NoteAdd, NoteEventKind::NoteRemove];
}

/// Payload delivered to list listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoteEvent {
    /// Outcome of `add_note`, success or failure.
    Added { note: Note, message: String },
    /// Outcome of `remove_note`.
    Removed { id: NoteId, message: String },
}

impl NoteEvent {
    pub fn kind(&self) -> NoteEventKind {
        match self {
            Self::Added { .. } => NoteEventKind::NoteAdd,
            Self::Removed { .. } => NoteEventKind::NoteRemove,
        }
    }

    /// Status line text for the message region.
    pub fn message(&self) -> &str {
        match self {
            Self::Added { message, .. } | Self::Removed { message, .. } => message,
        }
    }

    /// Derives the outcome from the payload id.
    pub fn is_success(&self) -> bool {
        match self {
            Self::Added { note, .. } => note.is_persisted(),
            Self::Removed { id, .. } => *id != REMOVED_NOTE_ID,
        }
    }
}
