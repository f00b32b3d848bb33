//! Views rendering the widget through a host `RenderPort`.
//!
//! # Responsibility
//! - Translate list events into region updates.
//! - Translate user actions into controller calls.
//!
//! # Invariants
//! - Views never own list entries; they only see event payload snapshots.

pub mod note_add_view;
pub mod note_list_view;
pub mod port;

use crate::view::port::{Region, RenderError, RenderPort};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Rendering port shared by both views and the host.
pub type SharedPort = Rc<RefCell<dyn RenderPort>>;

/// Errors raised while bootstrapping or redrawing views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Host page lacks a required region.
    MissingRegion(Region),
    Render(RenderError),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRegion(region) => write!(
                f,
                "host must provide region `{}` before display",
                region.element_id()
            ),
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ViewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Render(err) => Some(err),
            Self::MissingRegion(_) => None,
        }
    }
}

impl From<RenderError> for ViewError {
    fn from(value: RenderError) -> Self {
        match value {
            RenderError::MissingRegion(region) => Self::MissingRegion(region),
            other => Self::Render(other),
        }
    }
}
