//! BackofficeApi trait - the boundary between the session core and the
//! back-office REST API.
//!
//! `HttpClient` carries one method per endpoint; the trait exposes the subset
//! the team workflows need so they can run against an in-memory fake.

pub mod config;
pub mod error;
pub mod http;

use async_trait::async_trait;
use backoffice_types::{ActionResponse, Api, Team, TeamPermission, TeamResponse, UnreadCount, User};
use serde_json::Value;

pub use config::ClientConfig;
pub use error::{ClientError, ConfigError};
pub use http::HttpClient;

pub type Result<T> = std::result::Result<T, ClientError>;

#[async_trait]
pub trait BackofficeApi: Send + Sync {
    async fn me(&self) -> Result<User>;

    async fn teams(&self) -> Result<Vec<Team>>;

    async fn my_teams(&self) -> Result<Vec<Team>>;

    async fn team(&self, team_id: &str) -> Result<Team>;

    async fn my_visible_apis(&self) -> Result<Vec<Api>>;

    /// Unread notification badge of a team.
    /// Never fails: any transport failure or non-200 status counts as zero.
    async fn team_unread_notifications_count(&self, team_id: &str) -> UnreadCount;

    // ── Members ────────────────────────────────────────────────

    async fn members(&self, team_id: &str) -> Result<Vec<User>>;

    async fn addable_users_for_team(&self, team_id: &str) -> Result<Vec<User>>;

    async fn remove_member_from_team(&self, team_id: &str, user_id: &str)
        -> Result<ActionResponse>;

    async fn add_members_to_team(&self, team_id: &str, user_ids: &[String])
        -> Result<ActionResponse>;

    async fn update_team_member_permission(
        &self,
        team_id: &str,
        user_ids: &[String],
        permission: TeamPermission,
    ) -> Result<ActionResponse>;

    // ── API keys / access ──────────────────────────────────────

    async fn update_api_keys_visibility(
        &self,
        team_id: &str,
        show_api_key_only_to_admins: bool,
    ) -> Result<TeamResponse>;

    async fn clean_archived_subscriptions(&self, team_id: &str) -> Result<Value>;

    async fn ask_for_api_access(&self, team_ids: &[String], api_id: &str) -> Result<Value>;
}

#[async_trait]
impl BackofficeApi for HttpClient {
    async fn me(&self) -> Result<User> {
        HttpClient::me(self).await
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        HttpClient::teams(self).await
    }

    async fn my_teams(&self) -> Result<Vec<Team>> {
        HttpClient::my_teams(self).await
    }

    async fn team(&self, team_id: &str) -> Result<Team> {
        HttpClient::team(self, team_id).await
    }

    async fn my_visible_apis(&self) -> Result<Vec<Api>> {
        HttpClient::my_visible_apis(self).await
    }

    async fn team_unread_notifications_count(&self, team_id: &str) -> UnreadCount {
        HttpClient::team_unread_notifications_count(self, team_id).await
    }

    async fn members(&self, team_id: &str) -> Result<Vec<User>> {
        HttpClient::members(self, team_id).await
    }

    async fn addable_users_for_team(&self, team_id: &str) -> Result<Vec<User>> {
        HttpClient::addable_users_for_team(self, team_id).await
    }

    async fn remove_member_from_team(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<ActionResponse> {
        HttpClient::remove_member_from_team(self, team_id, user_id).await
    }

    async fn add_members_to_team(
        &self,
        team_id: &str,
        user_ids: &[String],
    ) -> Result<ActionResponse> {
        HttpClient::add_members_to_team(self, team_id, user_ids).await
    }

    async fn update_team_member_permission(
        &self,
        team_id: &str,
        user_ids: &[String],
        permission: TeamPermission,
    ) -> Result<ActionResponse> {
        HttpClient::update_team_member_permission(self, team_id, user_ids, permission).await
    }

    async fn update_api_keys_visibility(
        &self,
        team_id: &str,
        show_api_key_only_to_admins: bool,
    ) -> Result<TeamResponse> {
        HttpClient::update_api_keys_visibility(self, team_id, show_api_key_only_to_admins).await
    }

    async fn clean_archived_subscriptions(&self, team_id: &str) -> Result<Value> {
        HttpClient::clean_archived_subscriptions(self, team_id).await
    }

    async fn ask_for_api_access(&self, team_ids: &[String], api_id: &str) -> Result<Value> {
        HttpClient::ask_for_api_access(self, team_ids, api_id).await
    }
}
