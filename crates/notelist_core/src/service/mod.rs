//! Core use-case services.
//!
//! # Responsibility
//! - Own list state and route mutations through the dummy lifecycle.
//! - Keep views decoupled from list internals via events.

pub mod note_list;
