//! Core logic for the NoteList widget.
//! Model, observer, list and views are host-independent; hosts plug in
//! through `RenderPort`.

pub mod controller;
pub mod logging;
pub mod model;
pub mod observer;
pub mod service;
pub mod view;

pub use controller::{display_note_list, NoteController, NoteWidget};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::event::{NoteEvent, NoteEventKind};
pub use model::note::{Note, NoteId, NoteValidationError, REMOVED_NOTE_ID};
pub use observer::{
    DispatchReport, EventObserver, Listener, ListenerError, ListenerFailure, ListenerResult,
};
pub use service::note_list::{
    NoteList, NoteListError, NoteListener, ADD_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
};
pub use view::note_add_view::NoteAddView;
pub use view::note_list_view::NoteListView;
pub use view::port::{
    row_text, MemoryPage, Region, RenderError, RenderPort, RenderedRow, EMPTY_LIST_TEXT,
};
pub use view::{SharedPort, ViewError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
