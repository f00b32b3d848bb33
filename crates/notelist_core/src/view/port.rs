//! Host rendering port and the in-memory page implementation.
//!
//! # Responsibility
//! - Describe the three page regions the widget draws into.
//! - Keep model/controller code independent of any concrete host.
//!
//! # Invariants
//! - Region identifiers are fixed; hosts must expose all three before the
//!   widget is displayed.
//! - Rows are keyed by note id; only saved notes are rendered as rows.

use crate::model::note::{Note, NoteId};
use crate::observer::ListenerError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Text shown in the list region when there are no notes.
pub const EMPTY_LIST_TEXT: &str = "No notes yet.";

/// Addressable page region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    List,
    Message,
    Form,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::List, Region::Message, Region::Form];

    /// Fixed element identifier hosts expose the region under.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::List => "note-list",
            Self::Message => "note-message",
            Self::Form => "note-form",
        }
    }
}

/// Rendering failure reported by a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Host does not (or no longer) provide the region.
    MissingRegion(Region),
    /// Row removal targeted an id that is not rendered.
    MissingRow(NoteId),
    /// Row rendering was asked for a note without an id.
    UnsavedNote,
    /// Host output failed.
    Io(String),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRegion(region) => {
                write!(f, "region `{}` is not available", region.element_id())
            }
            Self::MissingRow(id) => write!(f, "row for note {id} is not rendered"),
            Self::UnsavedNote => write!(f, "cannot render a row for an unsaved note"),
            Self::Io(message) => write!(f, "render output failed: {message}"),
        }
    }
}

impl Error for RenderError {}

impl From<RenderError> for ListenerError {
    fn from(value: RenderError) -> Self {
        ListenerError::new(value.to_string())
    }
}

/// Rendering surface provided by the host.
pub trait RenderPort {
    fn has_region(&self, region: Region) -> bool;
    /// Redraws the whole list region; an empty slice shows the placeholder.
    fn render_list(&mut self, notes: &[Note]) -> Result<(), RenderError>;
    fn append_row(&mut self, note: &Note) -> Result<(), RenderError>;
    fn remove_row(&mut self, id: NoteId) -> Result<(), RenderError>;
    fn render_message(&mut self, message: &str) -> Result<(), RenderError>;
    fn render_form(&mut self) -> Result<(), RenderError>;
}

/// Single-line label for one note row.
///
/// Whitespace runs (including newlines) collapse to one space.
pub fn row_text(note: &Note) -> String {
    WHITESPACE_RE
        .replace_all(note.content().trim(), " ")
        .into_owned()
}

/// One rendered row in `MemoryPage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: NoteId,
    pub text: String,
}

/// In-memory page used for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    regions: BTreeSet<Region>,
    rows: Vec<RenderedRow>,
    placeholder: bool,
    message: Option<String>,
    form_rendered: bool,
    full_redraws: usize,
}

impl MemoryPage {
    /// Page exposing every region.
    pub fn new() -> Self {
        Self::with_regions(Region::ALL)
    }

    pub fn with_regions(regions: impl IntoIterator<Item = Region>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Drops a region, as when the host tears part of the page down.
    pub fn remove_region(&mut self, region: Region) {
        self.regions.remove(&region);
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn row_ids(&self) -> Vec<NoteId> {
        self.rows.iter().map(|row| row.id).collect()
    }

    /// Whether the list region currently shows `EMPTY_LIST_TEXT`.
    pub fn shows_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn form_rendered(&self) -> bool {
        self.form_rendered
    }

    /// Number of `render_list` calls so far.
    pub fn full_redraws(&self) -> usize {
        self.full_redraws
    }

    fn require(&self, region: Region) -> Result<(), RenderError> {
        if self.regions.contains(&region) {
            Ok(())
        } else {
            Err(RenderError::MissingRegion(region))
        }
    }
}

impl RenderPort for MemoryPage {
    fn has_region(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    fn render_list(&mut self, notes: &[Note]) -> Result<(), RenderError> {
        self.require(Region::List)?;
        let mut rows = Vec::with_capacity(notes.len());
        for note in notes {
            let id = note.id().ok_or(RenderError::UnsavedNote)?;
            rows.push(RenderedRow {
                id,
                text: row_text(note),
            });
        }
        self.placeholder = rows.is_empty();
        self.rows = rows;
        self.full_redraws += 1;
        Ok(())
    }

    fn append_row(&mut self, note: &Note) -> Result<(), RenderError> {
        self.require(Region::List)?;
        let id = note.id().ok_or(RenderError::UnsavedNote)?;
        self.placeholder = false;
        self.rows.push(RenderedRow {
            id,
            text: row_text(note),
        });
        Ok(())
    }

    fn remove_row(&mut self, id: NoteId) -> Result<(), RenderError> {
        self.require(Region::List)?;
        let position = self
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(RenderError::MissingRow(id))?;
        self.rows.remove(position);
        Ok(())
    }

    fn render_message(&mut self, message: &str) -> Result<(), RenderError> {
        self.require(Region::Message)?;
        self.message = Some(message.to_string());
        Ok(())
    }

    fn render_form(&mut self) -> Result<(), RenderError> {
        self.require(Region::Form)?;
        self.form_rendered = true;
        Ok(())
    }
}
