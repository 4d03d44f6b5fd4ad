//! Team administration workflows.
//!
//! Each workflow reads the session context, checks the capability predicate
//! and local business rules, calls the back-office, and feeds the resulting
//! team back into the store.

pub mod api_keys;
pub mod home;
pub mod members;
pub mod update_team;

use backoffice_client::ClientError;
use thiserror::Error;

use crate::permissions::CapabilityDenied;

pub use api_keys::{api_keys_path, clean_archived_subscriptions, show_api_keys};
pub use home::{api_page_path, edit_api_path, team_page_path, Home, HomeData};
pub use members::{filter_members, MemberRoster, TeamMembers};
pub use update_team::update_team;

/// Why a workflow did not complete.
///
/// `Client` means the request itself failed; `Refused` means it went through
/// and the server declined it.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("refused by the server{}", reason_suffix(.reason))]
    Refused { reason: Option<String> },

    #[error(transparent)]
    Denied(#[from] CapabilityDenied),

    #[error("{user} must remain an administrator of the team")]
    LastAdministrator { user: String },

    #[error("no team in scope")]
    NoTeamInScope,

    #[error("personal teams have no members to manage")]
    PersonalTeam,

    #[error("not logged in")]
    NotLoggedIn,

    #[error("switch to team {team} was superseded by a newer team update")]
    Superseded { team: String },
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(": {}", reason),
        None => String::new(),
    }
}

impl WorkflowError {
    /// The request reached the server, which said no.
    pub fn is_refusal(&self) -> bool {
        matches!(self, Self::Refused { .. })
    }

    /// Blocked before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Denied(_)
                | Self::LastAdministrator { .. }
                | Self::NoTeamInScope
                | Self::PersonalTeam
                | Self::NotLoggedIn
        )
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
