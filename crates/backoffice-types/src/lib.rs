//! Shared API Types for the Daikoku back-office
//!
//! Every type that crosses the JSON boundary between the back-office server
//! and the client core lives here.
//!
//! ## Rules
//!
//! 1. Server ids keep their wire names (`_id`, `_humanReadableId`)
//! 2. Fields the client does not interpret are kept in `extra` so that
//!    full-resource updates (PUT) send back what the server sent
//! 3. Business failures travel in the body (`done: false`), never as errors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped server fields carried through unchanged.
pub type Extra = Map<String, Value>;

// ============================================================================
// USERS
// ============================================================================

/// A back-office user, as returned by `/api/me` and the member endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_humanReadableId", default, skip_serializing_if = "Option::is_none")]
    pub human_readable_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    /// Site-wide administrator
    #[serde(default)]
    pub is_daikoku_admin: bool,
    /// Administrator of the tenant in scope
    #[serde(default)]
    pub is_tenant_admin: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            human_readable_id: None,
            name: name.into(),
            email: email.into(),
            picture: None,
            is_daikoku_admin: false,
            is_tenant_admin: false,
            extra: Extra::new(),
        }
    }
}

// ============================================================================
// TEAMS
// ============================================================================

/// Permission a user holds inside a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamPermission {
    Administrator,
    ApiEditor,
    User,
}

impl TeamPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::ApiEditor => "ApiEditor",
            Self::User => "User",
        }
    }
}

impl std::fmt::Display for TeamPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TeamPermission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "administrator" | "admin" => Ok(Self::Administrator),
            "apieditor" | "api-editor" => Ok(Self::ApiEditor),
            "user" => Ok(Self::User),
            other => Err(format!("unknown team permission: {}", other)),
        }
    }
}

/// Kind of team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamType {
    /// One-member team created for every user
    Personal,
    #[default]
    Organization,
    /// The tenant administration team
    Admin,
}

/// Membership entry of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUser {
    pub user_id: String,
    pub team_permission: TeamPermission,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_humanReadableId", default)]
    pub human_readable_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub team_type: TeamType,
    #[serde(rename = "_tenant", default, skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(default)]
    pub users: Vec<TeamUser>,
    #[serde(default)]
    pub show_api_key_only_to_admins: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Team {
    pub fn new(id: impl Into<String>, human_readable_id: impl Into<String>) -> Self {
        let human_readable_id = human_readable_id.into();
        Self {
            id: id.into(),
            name: human_readable_id.clone(),
            human_readable_id,
            team_type: TeamType::Organization,
            tenant: None,
            users: Vec::new(),
            show_api_key_only_to_admins: false,
            extra: Extra::new(),
        }
    }

    /// Builder-style membership helper, mostly for fixtures.
    pub fn with_member(mut self, user_id: impl Into<String>, permission: TeamPermission) -> Self {
        self.users.push(TeamUser {
            user_id: user_id.into(),
            team_permission: permission,
        });
        self
    }

    /// Permission held by `user_id`, if they are a member.
    pub fn permission_of(&self, user_id: &str) -> Option<TeamPermission> {
        self.users
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.team_permission)
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.permission_of(user_id).is_some()
    }

    /// Number of members holding `Administrator`.
    pub fn admin_count(&self) -> usize {
        self.users
            .iter()
            .filter(|u| u.team_permission == TeamPermission::Administrator)
            .count()
    }

    pub fn is_personal(&self) -> bool {
        self.team_type == TeamType::Personal
    }
}

// ============================================================================
// TENANTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_humanReadableId", default)]
    pub human_readable_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Tenant {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            human_readable_id: name.to_lowercase().replace(' ', "-"),
            name,
            title: None,
            description: None,
            logo: None,
            extra: Extra::new(),
        }
    }
}

// ============================================================================
// APIS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApiVisibility {
    #[default]
    Public,
    Private,
    PublicWithAuthorizations,
    AdminOnly,
}

/// Access status of one team on a non-public API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAuthorization {
    pub team: String,
    #[serde(default)]
    pub authorized: bool,
    #[serde(default)]
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_humanReadableId", default)]
    pub human_readable_id: String,
    /// Owning team id
    pub team: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_version: Option<String>,
    #[serde(default)]
    pub visibility: ApiVisibility,
    #[serde(default)]
    pub authorizations: Vec<ApiAuthorization>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Api {
    pub fn new(
        id: impl Into<String>,
        human_readable_id: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        let human_readable_id = human_readable_id.into();
        Self {
            id: id.into(),
            name: human_readable_id.clone(),
            human_readable_id,
            team: team.into(),
            current_version: None,
            visibility: ApiVisibility::Public,
            authorizations: Vec::new(),
            extra: Extra::new(),
        }
    }

    /// At least one team has been granted access.
    pub fn any_authorized(&self) -> bool {
        self.authorizations.iter().any(|a| a.authorized)
    }
}

// ============================================================================
// SUBSCRIPTIONS / API KEYS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub api: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

fn default_true() -> bool {
    true
}

// ============================================================================
// NOTIFICATIONS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub action: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationPage {
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub count: u64,
}

// ============================================================================
// ACTION RESPONSES
// ============================================================================

/// Body returned by mutating team endpoints.
///
/// `done: false` is a business refusal: the request went through but the
/// server declined it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ActionResponse {
    pub fn refused(&self) -> bool {
        !self.done
    }
}

/// Response of `POST /api/teams/{id}/apiKeys/visibility`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
}

/// Generic `{ "done": bool }` acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Done {
    #[serde(default)]
    pub done: bool,
}
