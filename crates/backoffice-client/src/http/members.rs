//! Team membership endpoints.

use backoffice_types::{ActionResponse, TeamPermission, User};
use serde_json::json;

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn member(&self, team_id: &str, user_id: &str) -> Result<User> {
        self.get(&format!("/api/teams/{}/members/{}", seg(team_id), seg(user_id)))
            .await
    }

    pub async fn members(&self, team_id: &str) -> Result<Vec<User>> {
        self.get(&format!("/api/teams/{}/members", seg(team_id))).await
    }

    /// Users of the tenant who are not yet members.
    pub async fn addable_users_for_team(&self, team_id: &str) -> Result<Vec<User>> {
        self.get(&format!("/api/teams/{}/addable-members", seg(team_id)))
            .await
    }

    pub async fn remove_member_from_team(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<ActionResponse> {
        self.delete(&format!("/api/teams/{}/members/{}", seg(team_id), seg(user_id)))
            .await
    }

    pub async fn add_members_to_team(
        &self,
        team_id: &str,
        user_ids: &[String],
    ) -> Result<ActionResponse> {
        self.post(
            &format!("/api/teams/{}/members", seg(team_id)),
            &json!({ "members": user_ids }),
        )
        .await
    }

    pub async fn update_team_member_permission(
        &self,
        team_id: &str,
        user_ids: &[String],
        permission: TeamPermission,
    ) -> Result<ActionResponse> {
        self.post(
            &format!("/api/teams/{}/members/_permission", seg(team_id)),
            &json!({ "members": user_ids, "permission": permission }),
        )
        .await
    }
}
