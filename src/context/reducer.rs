//! Context reducer - pure `(state, action) -> state`.
//!
//! No validation and no I/O: callers only dispatch payloads they trust, e.g.
//! UPDATE_TEAM after a successful server round-trip.

use serde_json::Value;

use super::action::Action;
use super::state::SessionContext;

pub fn reduce(state: &SessionContext, action: Action) -> SessionContext {
    match action {
        Action::Login {
            user,
            team,
            tenant,
            language,
        } => SessionContext {
            connected_user: user,
            current_team: team,
            tenant,
            current_language: language,
            ..SessionContext::with_history(state.history.clone())
        },

        Action::Logout => SessionContext::with_history(state.history.clone()),

        Action::Impersonate { impersonator } => SessionContext {
            impersonator,
            ..state.clone()
        },

        Action::UpdateTeam {
            team,
            unread_notifications_count,
        } => SessionContext {
            current_team: team,
            unread_notifications_count,
            ..state.clone()
        },

        Action::UpdateNotifs {
            unread_notifications_count,
        } => SessionContext {
            unread_notifications_count,
            ..state.clone()
        },

        Action::UpdateLanguage { language } => SessionContext {
            current_language: language,
            ..state.clone()
        },
    }
}

/// Reduce an undecoded action. Unknown kinds leave the state as it was;
/// known kinds apply whatever their payload carries.
pub fn reduce_raw(state: &SessionContext, raw: &Value) -> SessionContext {
    match Action::from_raw(raw) {
        Some(action) => reduce(state, action),
        None => {
            tracing::debug!(action = %raw, "ignoring unknown context action");
            state.clone()
        }
    }
}
