//! Context actions - the only way the session context changes.
//!
//! Each variant carries exactly the fields it replaces. On the wire the
//! action kind is the `type` tag (`LOGIN`, `UPDATE_TEAM`, ...).
//!
//! Raw actions are taken as given: only an unknown `type` is dropped. Within a
//! known kind, a missing or undecodable entity reads as `None`, a missing
//! count as zero and a missing language as the default.

use std::sync::Arc;

use backoffice_types::{Team, Tenant, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::state::DEFAULT_LANGUAGE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Login {
        #[serde(default)]
        user: Option<Arc<User>>,
        #[serde(default)]
        team: Option<Arc<Team>>,
        #[serde(default)]
        tenant: Option<Arc<Tenant>>,
        #[serde(default = "default_language")]
        language: Arc<str>,
    },
    Logout,
    Impersonate {
        #[serde(default)]
        impersonator: Option<Arc<User>>,
    },
    UpdateTeam {
        #[serde(default)]
        team: Option<Arc<Team>>,
        #[serde(rename = "unreadNotificationsCount", default)]
        unread_notifications_count: u64,
    },
    UpdateNotifs {
        #[serde(rename = "unreadNotificationsCount", default)]
        unread_notifications_count: u64,
    },
    UpdateLanguage { language: Arc<str> },
}

fn default_language() -> Arc<str> {
    Arc::from(DEFAULT_LANGUAGE)
}

impl Action {
    pub fn login(
        user: User,
        team: Option<Team>,
        tenant: Option<Tenant>,
        language: impl Into<Arc<str>>,
    ) -> Self {
        Self::Login {
            user: Some(Arc::new(user)),
            team: team.map(Arc::new),
            tenant: tenant.map(Arc::new),
            language: language.into(),
        }
    }

    pub fn impersonate(impersonator: Option<User>) -> Self {
        Self::Impersonate {
            impersonator: impersonator.map(Arc::new),
        }
    }

    pub fn update_team(team: Option<Team>, unread_notifications_count: u64) -> Self {
        Self::UpdateTeam {
            team: team.map(Arc::new),
            unread_notifications_count,
        }
    }

    pub fn update_notifs(unread_notifications_count: u64) -> Self {
        Self::UpdateNotifs {
            unread_notifications_count,
        }
    }

    pub fn update_language(language: impl Into<Arc<str>>) -> Self {
        Self::UpdateLanguage {
            language: language.into(),
        }
    }

    /// Decode a raw `{ "type": ..., ... }` action. `None` only when the
    /// kind is missing or unknown.
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let action = match raw.get("type")?.as_str()? {
            "LOGIN" => Self::Login {
                user: entity(raw, "user"),
                team: entity(raw, "team"),
                tenant: entity(raw, "tenant"),
                language: language(raw),
            },
            "LOGOUT" => Self::Logout,
            "IMPERSONATE" => Self::Impersonate {
                impersonator: entity(raw, "impersonator"),
            },
            "UPDATE_TEAM" => Self::UpdateTeam {
                team: entity(raw, "team"),
                unread_notifications_count: unread_count(raw),
            },
            "UPDATE_NOTIFS" => Self::UpdateNotifs {
                unread_notifications_count: unread_count(raw),
            },
            "UPDATE_LANGUAGE" => Self::UpdateLanguage {
                language: language(raw),
            },
            _ => return None,
        };
        Some(action)
    }

    /// Wire name of the action kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Login { .. } => "LOGIN",
            Self::Logout => "LOGOUT",
            Self::Impersonate { .. } => "IMPERSONATE",
            Self::UpdateTeam { .. } => "UPDATE_TEAM",
            Self::UpdateNotifs { .. } => "UPDATE_NOTIFS",
            Self::UpdateLanguage { .. } => "UPDATE_LANGUAGE",
        }
    }
}

fn entity<T: DeserializeOwned>(raw: &Value, field: &str) -> Option<Arc<T>> {
    let value = raw.get(field).filter(|v| !v.is_null())?;
    match T::deserialize(value) {
        Ok(entity) => Some(Arc::new(entity)),
        Err(e) => {
            debug!(field, error = %e, "undecodable entity in context action");
            None
        }
    }
}

fn unread_count(raw: &Value) -> u64 {
    raw.get("unreadNotificationsCount")
        .and_then(Value::as_u64)
        .unwrap_or(0)
}

fn language(raw: &Value) -> Arc<str> {
    raw.get("language")
        .and_then(Value::as_str)
        .map(Arc::from)
        .unwrap_or_else(default_language)
}
