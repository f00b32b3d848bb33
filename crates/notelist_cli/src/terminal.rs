//! Terminal host implementing the rendering port.
//!
//! Each region is a line prefix on one output stream: rows are indented,
//! status lines start with `>`.

use notelist_core::{row_text, Note, NoteId, Region, RenderError, RenderPort, EMPTY_LIST_TEXT};
use std::collections::BTreeSet;
use std::io::Write;

const FORM_TEXT: &str = "new note: add <text>    remove: rm <id>";

pub struct TerminalPort<W: Write> {
    out: W,
    shown: BTreeSet<NoteId>,
}

impl<W: Write> TerminalPort<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: BTreeSet::new(),
        }
    }

    /// Writes a free-form line outside any region.
    pub fn write_line(&mut self, line: &str) -> Result<(), RenderError> {
        writeln!(self.out, "{line}").map_err(io_error)?;
        self.out.flush().map_err(io_error)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn row(&mut self, marker: char, note: &Note) -> Result<NoteId, RenderError> {
        let id = note.id().ok_or(RenderError::UnsavedNote)?;
        writeln!(self.out, "  {marker} [{id}] {}", row_text(note)).map_err(io_error)?;
        Ok(id)
    }
}

impl<W: Write> RenderPort for TerminalPort<W> {
    fn has_region(&self, _region: Region) -> bool {
        true
    }

    fn render_list(&mut self, notes: &[Note]) -> Result<(), RenderError> {
        writeln!(self.out, "notes:").map_err(io_error)?;
        self.shown.clear();
        if notes.is_empty() {
            writeln!(self.out, "  {EMPTY_LIST_TEXT}").map_err(io_error)?;
        }
        for note in notes {
            let id = self.row(' ', note)?;
            self.shown.insert(id);
        }
        self.out.flush().map_err(io_error)
    }

    fn append_row(&mut self, note: &Note) -> Result<(), RenderError> {
        let id = self.row('+', note)?;
        self.shown.insert(id);
        self.out.flush().map_err(io_error)
    }

    fn remove_row(&mut self, id: NoteId) -> Result<(), RenderError> {
        if !self.shown.remove(&id) {
            return Err(RenderError::MissingRow(id));
        }
        writeln!(self.out, "  - [{id}]").map_err(io_error)?;
        self.out.flush().map_err(io_error)
    }

    fn render_message(&mut self, message: &str) -> Result<(), RenderError> {
        self.write_line(&format!("> {message}"))
    }

    fn render_form(&mut self) -> Result<(), RenderError> {
        self.write_line(FORM_TEXT)
    }
}

fn io_error(err: std::io::Error) -> RenderError {
    RenderError::Io(err.to_string())
}
