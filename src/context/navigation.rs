//! Navigation handle threaded through the session context.
//!
//! The store never interprets it; it only carries it across LOGIN and LOGOUT
//! so that views can keep pushing locations after the session changes.

use std::sync::{Arc, Mutex, PoisonError};

/// Shared, cheaply clonable location history.
///
/// Equality is identity: two handles are equal when they share a history.
#[derive(Clone, Default)]
pub struct Navigator {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, location: impl Into<String>) {
        let location = location.into();
        tracing::debug!(%location, "navigate");
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location);
    }

    /// Current location, if anything has been pushed.
    pub fn location(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn same_as(&self, other: &Navigator) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl PartialEq for Navigator {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("location", &self.location())
            .finish()
    }
}
