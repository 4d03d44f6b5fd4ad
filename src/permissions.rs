//! Capability predicate - may this user do `operation` on `resource`?
//!
//! Pure and total so that views can evaluate it synchronously.

use std::fmt;

use backoffice_types::{Team, TeamPermission, User};
use thiserror::Error;

use crate::context::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Api,
    ApiKey,
    Asset,
    Backoffice,
    Notification,
    Stat,
    Team,
    AuditTrail,
    Session,
    Tenant,
    User,
}

impl Resource {
    /// Resources that only exist within a team.
    pub fn is_team_scoped(&self) -> bool {
        match self {
            Self::Api
            | Self::ApiKey
            | Self::Asset
            | Self::Backoffice
            | Self::Notification
            | Self::Stat
            | Self::Team => true,
            Self::AuditTrail | Self::Session | Self::Tenant | Self::User => false,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::Manage => "manage",
        })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Api => "api",
            Self::ApiKey => "apikey",
            Self::Asset => "asset",
            Self::Backoffice => "backoffice",
            Self::Notification => "notification",
            Self::Stat => "stat",
            Self::Team => "team",
            Self::AuditTrail => "audit-trail",
            Self::Session => "session",
            Self::Tenant => "tenant",
            Self::User => "user",
        })
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "manage" => Ok(Self::Manage),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}

impl std::str::FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let resource = match s.to_ascii_lowercase().as_str() {
            "api" => Self::Api,
            "apikey" | "api-key" => Self::ApiKey,
            "asset" => Self::Asset,
            "backoffice" => Self::Backoffice,
            "notification" => Self::Notification,
            "stat" => Self::Stat,
            "team" => Self::Team,
            "audit-trail" | "audittrail" => Self::AuditTrail,
            "session" => Self::Session,
            "tenant" => Self::Tenant,
            "user" => Self::User,
            other => return Err(format!("unknown resource: {}", other)),
        };
        Ok(resource)
    }
}

/// Site or tenant administrator.
pub fn is_administrator(user: &User) -> bool {
    user.is_daikoku_admin || user.is_tenant_admin
}

/// Daikoku administrator, or `Administrator` of `team`. Never true without a team.
pub fn is_team_admin(user: &User, team: Option<&Team>) -> bool {
    let Some(team) = team else {
        return false;
    };
    if user.is_daikoku_admin {
        return true;
    }
    team.permission_of(&user.id) == Some(TeamPermission::Administrator)
}

pub fn can_do(user: &User, operation: Operation, resource: Resource, scope_team: Option<&Team>) -> bool {
    if !resource.is_team_scoped() {
        return is_administrator(user);
    }

    let Some(team) = scope_team else {
        return false;
    };

    if is_administrator(user) {
        return true;
    }

    match team.permission_of(&user.id) {
        Some(TeamPermission::Administrator) => true,
        Some(TeamPermission::ApiEditor) | Some(TeamPermission::User) => {
            operation == Operation::Read
        }
        None => false,
    }
}

/// `can_do` for the connected user and current team; false when logged out.
pub fn can_do_in(ctx: &SessionContext, operation: Operation, resource: Resource) -> bool {
    match &ctx.connected_user {
        Some(user) => can_do(user, operation, resource, ctx.current_team.as_deref()),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{user} cannot {operation} {resource}{}", scope_suffix(.team))]
pub struct CapabilityDenied {
    pub user: String,
    pub operation: Operation,
    pub resource: Resource,
    pub team: Option<String>,
}

fn scope_suffix(team: &Option<String>) -> String {
    match team {
        Some(team) => format!(" in team {}", team),
        None => String::new(),
    }
}

/// `can_do`, as a `Result` for call sites that report the denial.
pub fn require(
    user: &User,
    operation: Operation,
    resource: Resource,
    scope_team: Option<&Team>,
) -> Result<(), CapabilityDenied> {
    if can_do(user, operation, resource, scope_team) {
        Ok(())
    } else {
        Err(CapabilityDenied {
            user: user.id.clone(),
            operation,
            resource,
            team: scope_team.map(|t| t.id.clone()),
        })
    }
}
