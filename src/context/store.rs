//! Context store - owns the current session context.
//!
//! Dispatches are applied one at a time under the watch channel's lock and
//! every subscriber sees the result. Overlapping async updates are
//! last-write-wins unless the stale guard is on, in which case an update
//! whose ticket is older than the last committed one is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;
use tokio::sync::watch;
use tracing::debug;

use super::action::Action;
use super::navigation::Navigator;
use super::reducer::{reduce, reduce_raw};
use super::state::SessionContext;

/// Sequence number taken before an async round-trip whose result will be
/// dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UpdateTicket(u64);

impl UpdateTicket {
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

pub struct ContextStore {
    tx: watch::Sender<SessionContext>,
    issued: AtomicU64,
    committed: AtomicU64,
    guard_stale: bool,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStore {
    pub fn new() -> Self {
        Self::from_state(SessionContext::default())
    }

    /// Logged-out store threading `history`.
    pub fn with_history(history: Navigator) -> Self {
        Self::from_state(SessionContext::with_history(Some(history)))
    }

    pub fn from_state(state: SessionContext) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self {
            tx,
            issued: AtomicU64::new(0),
            committed: AtomicU64::new(0),
            guard_stale: false,
        }
    }

    /// Drop ticketed updates that resolve after a newer one.
    pub fn guard_stale_updates(mut self, enabled: bool) -> Self {
        self.guard_stale = enabled;
        self
    }

    pub fn guards_stale_updates(&self) -> bool {
        self.guard_stale
    }

    /// Copy of the current context.
    pub fn snapshot(&self) -> SessionContext {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionContext> {
        self.tx.subscribe()
    }

    pub fn dispatch(&self, action: Action) {
        debug!(action = action.kind(), "dispatch");
        self.tx.send_modify(|state| *state = reduce(state, action));
    }

    /// Dispatch an undecoded action; unknown kinds change nothing and
    /// notify nobody.
    pub fn dispatch_raw(&self, raw: &Value) {
        self.tx.send_if_modified(|state| {
            let next = reduce_raw(state, raw);
            if next == *state {
                return false;
            }
            *state = next;
            true
        });
    }

    pub fn ticket(&self) -> UpdateTicket {
        UpdateTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Dispatch the result of the round-trip started with `ticket`.
    ///
    /// Returns `false` when the guard is on and a newer ticket has already
    /// been committed. Without the guard this is `dispatch`.
    pub fn dispatch_if_current(&self, ticket: UpdateTicket, action: Action) -> bool {
        if !self.guard_stale {
            self.dispatch(action);
            return true;
        }

        let kind = action.kind();
        let applied = self.tx.send_if_modified(|state| {
            let last = self.committed.load(Ordering::SeqCst);
            if ticket.0 < last {
                return false;
            }
            self.committed.store(ticket.0, Ordering::SeqCst);
            *state = reduce(state, action);
            true
        });

        if applied {
            debug!(action = kind, ticket = ticket.0, "dispatch");
        } else {
            debug!(action = kind, ticket = ticket.0, "dropping stale update");
        }
        applied
    }

    /// Push `location` onto the threaded navigation handle, if any.
    pub fn navigate(&self, location: impl Into<String>) {
        self.tx.borrow().navigate(location);
    }
}
