//! Named-event observer registry.
//!
//! # Responsibility
//! - Keep an ordered listener list per pre-registered event kind.
//! - Dispatch payloads to listeners in attachment order.
//!
//! # Invariants
//! - Listeners are unique per event kind, compared by handle identity.
//! - Notifying or attaching to an unregistered kind is a no-op.
//! - One failing (or panicking) listener never prevents delivery to the
//!   remaining listeners of the same dispatch.
//! - Dispatch iterates over a snapshot, so nested `notify` calls from a
//!   listener recurse synchronously.

use crate::logging::truncate_single_line;
use log::warn;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

const MAX_FAILURE_REASON_CHARS: usize = 160;

/// Result returned by every listener callback.
pub type ListenerResult = Result<(), ListenerError>;

/// Error reported by a listener back to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ListenerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener failed: {}", self.message)
    }
}

impl Error for ListenerError {}

/// Shared callback handle.
///
/// Cloning yields the same identity; two handles built from separate
/// `Listener::new` calls are never equal even when wrapping equal closures.
pub struct Listener<P> {
    callback: Rc<dyn Fn(&P) -> ListenerResult>,
}

impl<P> Listener<P> {
    pub fn new(callback: impl Fn(&P) -> ListenerResult + 'static) -> Self {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Returns whether both handles point to the same callback.
    pub fn same_as(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.callback) as *const (),
            Rc::as_ptr(&other.callback) as *const (),
        )
    }

    fn call(&self, payload: &P) -> ListenerResult {
        (self.callback)(payload)
    }
}

impl<P> Clone for Listener<P> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<P> Debug for Listener<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("callback", &Rc::as_ptr(&self.callback))
            .finish()
    }
}

/// Why one listener did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerFailure {
    Failed(ListenerError),
    Panicked(String),
}

impl Display for ListenerFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failed(err) => write!(f, "{err}"),
            Self::Panicked(reason) => write!(f, "listener panicked: {reason}"),
        }
    }
}

/// Outcome of one `notify` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Listeners that returned `Ok(())`.
    pub delivered: usize,
    /// Failed listeners as `(attachment index, failure)`.
    pub failures: Vec<(usize, ListenerFailure)>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total listeners invoked, successful or not.
    pub fn invoked(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

/// Registry from event kind `K` to ordered listeners receiving `&P`.
pub struct EventObserver<K, P> {
    listeners: BTreeMap<K, Vec<Listener<P>>>,
}

impl<K, P> Default for EventObserver<K, P> {
    fn default() -> Self {
        Self {
            listeners: BTreeMap::new(),
        }
    }
}

impl<K: Copy + Ord + Debug, P> EventObserver<K, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-declares event kinds. Registering a kind twice keeps its listeners.
    pub fn register(&mut self, kinds: impl IntoIterator<Item = K>) {
        for kind in kinds {
            self.listeners.entry(kind).or_default();
        }
    }

    pub fn is_registered(&self, kind: K) -> bool {
        self.listeners.contains_key(&kind)
    }

    /// Number of listeners attached to `kind` (zero when unregistered).
    pub fn listener_count(&self, kind: K) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Attaches `listener` to `kind`.
    ///
    /// Returns `false` without changes when the kind is unknown or the same
    /// handle is already attached.
    pub fn attach(&mut self, kind: K, listener: Listener<P>) -> bool {
        let Some(attached) = self.listeners.get_mut(&kind) else {
            return false;
        };
        if attached.iter().any(|existing| existing.same_as(&listener)) {
            return false;
        }
        attached.push(listener);
        true
    }

    /// Invokes every listener of `kind` with `payload`, in attachment order.
    pub fn notify(&self, kind: K, payload: &P) -> DispatchReport {
        let mut report = DispatchReport::default();
        let Some(attached) = self.listeners.get(&kind) else {
            return report;
        };
        let snapshot = attached.clone();

        for (index, listener) in snapshot.iter().enumerate() {
            let failure = match catch_unwind(AssertUnwindSafe(|| listener.call(payload))) {
                Ok(Ok(())) => {
                    report.delivered += 1;
                    continue;
                }
                Ok(Err(err)) => ListenerFailure::Failed(err),
                Err(panic_payload) => ListenerFailure::Panicked(panic_reason(panic_payload)),
            };
            warn!(
                "event=listener_failed module=observer status=error kind={:?} index={} reason={}",
                kind, index, failure
            );
            report.failures.push((index, failure));
        }

        report
    }
}

fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    let reason = if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    };
    truncate_single_line(&reason, MAX_FAILURE_REASON_CHARS)
}
