//! Team endpoints (`/api/teams/...`).

use backoffice_types::{Api, Team, TeamResponse};
use serde_json::{json, Value};

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn teams(&self) -> Result<Vec<Team>> {
        self.get("/api/teams").await
    }

    pub async fn all_joinable_teams(&self) -> Result<Vec<Team>> {
        self.get("/api/teams/joinable").await
    }

    pub async fn team(&self, team_id: &str) -> Result<Team> {
        self.get(&format!("/api/teams/{}", seg(team_id))).await
    }

    /// Team with every property, for its administrators.
    pub async fn team_full(&self, team_id: &str) -> Result<Team> {
        self.get(&format!("/api/teams/{}/_full", seg(team_id))).await
    }

    pub async fn team_home(&self, team_id: &str) -> Result<Value> {
        self.get(&format!("/api/teams/{}/home", seg(team_id))).await
    }

    pub async fn visible_apis_of_team(&self, team_id: &str) -> Result<Vec<Api>> {
        self.get(&format!("/api/teams/{}/visible-apis", seg(team_id)))
            .await
    }

    pub async fn create_team(&self, team: &Team) -> Result<Team> {
        self.post("/api/teams", team).await
    }

    /// Full update; the whole team is sent.
    pub async fn update_team(&self, team: &Team) -> Result<Team> {
        self.put(&format!("/api/teams/{}", seg(&team.id)), team).await
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<Value> {
        self.delete(&format!("/api/teams/{}", seg(team_id))).await
    }

    pub async fn ask_to_join_team(&self, team_id: &str) -> Result<Value> {
        self.post_action(&format!("/api/teams/{}/join", seg(team_id)))
            .await
    }

    pub async fn update_api_keys_visibility(
        &self,
        team_id: &str,
        show_api_key_only_to_admins: bool,
    ) -> Result<TeamResponse> {
        self.post(
            &format!("/api/teams/{}/apiKeys/visibility", seg(team_id)),
            &json!({ "showApiKeyOnlyToAdmins": show_api_key_only_to_admins }),
        )
        .await
    }

    pub async fn save_team_translations(&self, team_id: &str, translations: &Value) -> Result<Value> {
        self.post(&format!("/api/teams/{}/_translate", seg(team_id)), translations)
            .await
    }
}
