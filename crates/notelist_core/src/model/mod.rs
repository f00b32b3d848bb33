//! Domain model for the note widget.
//!
//! # Responsibility
//! - Define the note entity and its dummy persistence lifecycle.
//! - Define the closed event set broadcast on list changes.
//!
//! # Invariants
//! - Identity is an integer assigned by the owning list, never by the note.

pub mod event;
pub mod note;
