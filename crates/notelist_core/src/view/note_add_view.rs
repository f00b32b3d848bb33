//! Content form rendering and submission.

use crate::controller::NoteController;
use crate::model::note::NoteId;
use crate::service::note_list::NoteListError;
use crate::view::{SharedPort, ViewError};

pub struct NoteAddView {
    controller: NoteController,
    port: SharedPort,
}

impl NoteAddView {
    pub fn new(controller: NoteController, port: SharedPort) -> Self {
        Self { controller, port }
    }

    /// Draws the content input and submit control into the form region.
    pub fn display(&self) -> Result<(), ViewError> {
        self.port.borrow_mut().render_form()?;
        Ok(())
    }

    /// Handles a form submit with the raw input value.
    ///
    /// The outcome is also delivered to list listeners, so callers may
    /// ignore the returned result.
    pub fn submit(&self, content: &str) -> Result<NoteId, NoteListError> {
        self.controller.add_note(content)
    }
}
