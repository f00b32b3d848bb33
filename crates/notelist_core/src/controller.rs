//! Mediation between views and the note list.
//!
//! # Responsibility
//! - Translate view actions into `NoteList` calls.
//! - Bootstrap a fresh list together with its views on a host port.
//!
//! # Invariants
//! - The controller holds no state besides the shared list handle.
//! - The list is borrowed only for the duration of one call; listeners
//!   must not call back into the controller while an event is dispatched.

use crate::model::event::NoteEventKind;
use crate::model::note::{Note, NoteId};
use crate::service::note_list::{NoteList, NoteListError, NoteListener};
use crate::view::note_add_view::NoteAddView;
use crate::view::note_list_view::NoteListView;
use crate::view::port::Region;
use crate::view::{SharedPort, ViewError};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
pub struct NoteController {
    list: Rc<RefCell<NoteList>>,
}

/// A displayed widget: controller plus both wired views.
pub struct NoteWidget {
    pub controller: NoteController,
    pub add_view: NoteAddView,
    pub list_view: NoteListView,
}

impl NoteController {
    pub fn new(list: Rc<RefCell<NoteList>>) -> Self {
        Self { list }
    }

    /// Builds a note from raw form content and adds it.
    pub fn add_note(&self, content: impl Into<String>) -> Result<NoteId, NoteListError> {
        let mut note = Note::new(content);
        self.list.borrow_mut().add_note(&mut note)
    }

    /// Removes the note shown under `id`.
    pub fn remove_note(&self, id: NoteId) -> Result<NoteId, NoteListError> {
        self.list.borrow_mut().remove_note_by_id(id)
    }

    pub fn attach_observer(&self, kind: NoteEventKind, listener: NoteListener) -> bool {
        self.list.borrow_mut().attach_observer(kind, listener)
    }

    /// Clones the current notes in display order.
    pub fn snapshot(&self) -> Vec<Note> {
        self.list.borrow().notes().to_vec()
    }

    pub fn len(&self) -> usize {
        self.list.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.borrow().is_empty()
    }
}

/// Creates a fresh list and displays it on `port`.
///
/// # Errors
/// - `MissingRegion` when the host has not provided every `Region`; nothing
///   is rendered in that case.
/// - `Render` when the initial form or list draw fails.
pub fn display_note_list(port: SharedPort) -> Result<NoteWidget, ViewError> {
    {
        let port = port.borrow();
        if let Some(missing) = Region::ALL
            .into_iter()
            .find(|region| !port.has_region(*region))
        {
            info!(
                "event=display module=controller status=error missing_region={}",
                missing.element_id()
            );
            return Err(ViewError::MissingRegion(missing));
        }
    }

    let controller = NoteController::default();
    let list_view = NoteListView::new(controller.clone(), Rc::clone(&port));
    let add_view = NoteAddView::new(controller.clone(), port);
    list_view.subscribe();
    add_view.display()?;
    list_view.display()?;
    info!("event=display module=controller status=ok");

    Ok(NoteWidget {
        controller,
        add_view,
        list_view,
    })
}
