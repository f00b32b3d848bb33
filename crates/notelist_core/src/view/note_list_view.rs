//! List region and status line rendering.
//!
//! # Responsibility
//! - Keep the list region in step with `NoteList` events.
//! - Mirror every event message into the message region.
//! - Turn row remove clicks into controller calls.
//!
//! # Invariants
//! - The view mirrors list contents from event payloads, whether or not the
//!   matching render succeeded; redraw decisions read the mirror, never a
//!   count of successful renders.
//! - Full redraw when the list was empty, becomes empty, or the previous
//!   render failed; every other change patches one row keyed by note id.
//! - Row patching and status updates are separate listeners, so a broken
//!   list region never hides the status message.

use crate::controller::NoteController;
use crate::model::event::{NoteEvent, NoteEventKind};
use crate::model::note::{Note, NoteId};
use crate::observer::{Listener, ListenerResult};
use crate::service::note_list::NoteListError;
use crate::view::port::RenderPort;
use crate::view::{SharedPort, ViewError};
use std::cell::RefCell;
use std::rc::Rc;

/// Rows the list region should show, plus whether the page lags behind.
#[derive(Debug, Default)]
struct RowMirror {
    notes: Vec<Note>,
    stale: bool,
}

pub struct NoteListView {
    controller: NoteController,
    port: SharedPort,
    mirror: Rc<RefCell<RowMirror>>,
}

impl NoteListView {
    pub fn new(controller: NoteController, port: SharedPort) -> Self {
        Self {
            controller,
            port,
            mirror: Rc::new(RefCell::new(RowMirror::default())),
        }
    }

    /// Redraws the list region from the current list contents.
    pub fn display(&self) -> Result<(), ViewError> {
        let mut mirror = self.mirror.borrow_mut();
        mirror.notes = self.controller.snapshot();
        let rendered = self.port.borrow_mut().render_list(&mirror.notes);
        mirror.stale = rendered.is_err();
        rendered?;
        Ok(())
    }

    /// Attaches the row and status listeners to both list events.
    pub fn subscribe(&self) {
        let rows = self.rows_listener();
        let status = self.status_listener();
        for kind in NoteEventKind::ALL {
            self.controller.attach_observer(kind, rows.clone());
            self.controller.attach_observer(kind, status.clone());
        }
    }

    /// Handles a remove click on the row for `id`.
    pub fn remove_clicked(&self, id: NoteId) -> Result<NoteId, NoteListError> {
        self.controller.remove_note(id)
    }

    /// Rows the list region should currently show.
    pub fn shown_rows(&self) -> usize {
        self.mirror.borrow().notes.len()
    }

    /// Whether the last list render failed and the next event will redraw.
    pub fn is_stale(&self) -> bool {
        self.mirror.borrow().stale
    }

    fn rows_listener(&self) -> Listener<NoteEvent> {
        let port = Rc::clone(&self.port);
        let mirror = Rc::clone(&self.mirror);
        Listener::new(move |event: &NoteEvent| {
            patch_rows(&mut *port.borrow_mut(), &mut mirror.borrow_mut(), event)
        })
    }

    fn status_listener(&self) -> Listener<NoteEvent> {
        let port = Rc::clone(&self.port);
        Listener::new(move |event: &NoteEvent| {
            port.borrow_mut().render_message(event.message())?;
            Ok(())
        })
    }
}

fn patch_rows(
    port: &mut dyn RenderPort,
    mirror: &mut RowMirror,
    event: &NoteEvent,
) -> ListenerResult {
    if !event.is_success() {
        return Ok(());
    }
    let rendered = match event {
        NoteEvent::Added { note, .. } => {
            let redraw = mirror.stale || mirror.notes.is_empty();
            mirror.notes.push(note.clone());
            if redraw {
                port.render_list(&mirror.notes)
            } else {
                port.append_row(note)
            }
        }
        NoteEvent::Removed { id, .. } => {
            mirror.notes.retain(|shown| shown.id() != Some(*id));
            if mirror.stale || mirror.notes.is_empty() {
                port.render_list(&mirror.notes)
            } else {
                port.remove_row(*id)
            }
        }
    };
    mirror.stale = rendered.is_err();
    rendered?;
    Ok(())
}
