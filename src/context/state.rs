//! Session Context
//!
//! Who is logged in, as what team, under what tenant, in what language, with
//! how many unread notifications.

use std::sync::Arc;

use backoffice_types::{Team, Tenant, User};

use super::navigation::Navigator;

pub const DEFAULT_LANGUAGE: &str = "En";

/// Session context - one value per application session.
///
/// Entities are behind `Arc`: a transition that leaves a field alone hands the
/// very same allocation to the next state.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// Administrator acting as `connected_user`, during impersonation
    pub impersonator: Option<Arc<User>>,
    /// Acting principal; `None` when logged out
    pub connected_user: Option<Arc<User>>,
    /// Team whose scoped views are active
    pub current_team: Option<Arc<Team>>,
    /// Advisory badge count
    pub unread_notifications_count: u64,
    pub tenant: Option<Arc<Tenant>>,
    /// Navigation handle, kept across LOGIN and LOGOUT
    pub history: Option<Navigator>,
    pub current_language: Arc<str>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            impersonator: None,
            connected_user: None,
            current_team: None,
            unread_notifications_count: 0,
            tenant: None,
            history: None,
            current_language: Arc::from(DEFAULT_LANGUAGE),
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logged-out defaults carrying `history`.
    pub fn with_history(history: Option<Navigator>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.connected_user.is_some()
    }

    pub fn is_impersonating(&self) -> bool {
        self.impersonator.is_some()
    }

    pub fn has_team(&self) -> bool {
        self.current_team.is_some()
    }

    /// An impersonator only makes sense while someone is logged in.
    /// The reducer does not enforce this; callers can check it.
    pub fn is_consistent(&self) -> bool {
        self.impersonator.is_none() || self.connected_user.is_some()
    }

    /// Push `location` onto the navigation handle, if one is threaded.
    pub fn navigate(&self, location: impl Into<String>) {
        if let Some(history) = &self.history {
            history.push(location);
        }
    }
}
