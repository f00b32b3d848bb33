//! Ordered in-memory note list.
//!
//! # Responsibility
//! - Own the notes, the auto-increment id counter and the event observer.
//! - Run add/remove through the dummy persistence path and broadcast the
//!   outcome to listeners.
//!
//! # Invariants
//! - Insertion order is display order.
//! - Every contained note has a unique id `> 0`.
//! - `next_id` starts at 1 and only advances on a successful add.
//! - Each `add_note`/`remove_note` call emits exactly one event.

use crate::model::event::{NoteEvent, NoteEventKind};
use crate::model::note::{Note, NoteId, NoteValidationError, REMOVED_NOTE_ID};
use crate::observer::{EventObserver, Listener};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_NOTE_ID: NoteId = 1;

/// Status text for a rejected add.
pub const ADD_FAILED_MESSAGE: &str = "Note content cannot be empty.";
/// Status text for a remove that matched nothing.
pub const NOT_FOUND_MESSAGE: &str = "Note is not found.";

/// Errors returned to the caller of list mutations.
///
/// The same outcome is always broadcast as an event too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteListError {
    /// Dummy save rejected the note.
    Validation(NoteValidationError),
    /// No contained note carries the requested id.
    NotFound(Option<NoteId>),
}

impl Display for NoteListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(Some(id)) => write!(f, "note not found: {id}"),
            Self::NotFound(None) => write!(f, "note not found: unsaved note"),
        }
    }
}

impl Error for NoteListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<NoteValidationError> for NoteListError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Listener type accepted by `NoteList::attach_observer`.
pub type NoteListener = Listener<NoteEvent>;

pub struct NoteList {
    notes: Vec<Note>,
    next_id: NoteId,
    observer: EventObserver<NoteEventKind, NoteEvent>,
}

impl Default for NoteList {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteList {
    /// Creates an empty list with both list events registered.
    pub fn new() -> Self {
        let mut observer = EventObserver::new();
        observer.register(NoteEventKind::ALL);
        Self {
            notes: Vec::new(),
            next_id: FIRST_NOTE_ID,
            observer,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Id the next successful add will receive.
    pub fn next_id(&self) -> NoteId {
        self.next_id
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == Some(id))
    }

    /// Saves `note` with the next id and appends a copy of it.
    ///
    /// On success the caller's `note` carries the assigned id, so it can be
    /// handed back to `remove_note` later. Emits `NoteAdd` on both outcomes.
    ///
    /// # Errors
    /// - `Validation` when the dummy save rejects the note; nothing is
    ///   appended and the counter does not move.
    pub fn add_note(&mut self, note: &mut Note) -> Result<NoteId, NoteListError> {
        let candidate_id = self.next_id;
        match note.save_dummy(candidate_id) {
            Ok(()) => {
                self.next_id += 1;
                self.notes.push(note.clone());
                info!(
                    "event=note_add module=note_list status=ok id={} len={}",
                    candidate_id,
                    self.notes.len()
                );
                self.emit(NoteEvent::Added {
                    message: added_message(note),
                    note: note.clone(),
                });
                Ok(candidate_id)
            }
            Err(err) => {
                info!(
                    "event=note_add module=note_list status=error reason={} len={}",
                    err,
                    self.notes.len()
                );
                self.emit(NoteEvent::Added {
                    note: note.clone(),
                    message: ADD_FAILED_MESSAGE.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Removes the contained note whose id equals `note`'s id.
    ///
    /// Emits `NoteRemove` with the removed id, or `REMOVED_NOTE_ID` when no
    /// note matched.
    ///
    /// # Errors
    /// - `NotFound` when `note` is unsaved, already removed or foreign.
    pub fn remove_note(&mut self, note: &Note) -> Result<NoteId, NoteListError> {
        self.remove_matching(note.id())
    }

    /// Same as `remove_note`, keyed by id only.
    pub fn remove_note_by_id(&mut self, id: NoteId) -> Result<NoteId, NoteListError> {
        self.remove_matching(Some(id))
    }

    /// Attaches a listener to one list event.
    ///
    /// Returns `false` when the same handle is already attached.
    pub fn attach_observer(&mut self, kind: NoteEventKind, listener: NoteListener) -> bool {
        self.observer.attach(kind, listener)
    }

    fn remove_matching(&mut self, id: Option<NoteId>) -> Result<NoteId, NoteListError> {
        let position = id.and_then(|wanted| {
            self.notes
                .iter()
                .position(|candidate| candidate.id() == Some(wanted))
        });

        let Some((position, removed_id)) = position.zip(id) else {
            info!(
                "event=note_remove module=note_list status=not_found id={:?} len={}",
                id,
                self.notes.len()
            );
            self.emit(NoteEvent::Removed {
                id: REMOVED_NOTE_ID,
                message: NOT_FOUND_MESSAGE.to_string(),
            });
            return Err(NoteListError::NotFound(id));
        };

        let mut removed = self.notes.remove(position);
        removed.remove_dummy();
        info!(
            "event=note_remove module=note_list status=ok id={} len={}",
            removed_id,
            self.notes.len()
        );
        self.emit(NoteEvent::Removed {
            id: removed_id,
            message: removed_message(&removed),
        });
        Ok(removed_id)
    }

    fn emit(&self, event: NoteEvent) {
        let kind = event.kind();
        let report = self.observer.notify(kind, &event);
        debug!(
            "event=dispatch module=note_list status={} kind={:?} delivered={} failed={}",
            if report.is_clean() { "ok" } else { "error" },
            kind,
            report.delivered,
            report.failures.len()
        );
    }
}

fn added_message(note: &Note) -> String {
    format!("{} is added.", note.content())
}

fn removed_message(note: &Note) -> String {
    format!("{} is removed.", note.content())
}
