//! Connected-user endpoints (`/api/me/...`).

use backoffice_types::{Api, Team, Tenant, User};
use serde_json::Value;

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn me(&self) -> Result<User> {
        self.get("/api/me").await
    }

    /// Delete the connected user's own account.
    pub async fn delete_self(&self) -> Result<Value> {
        self.delete("/api/me").await
    }

    /// Tenant owning `team_id`.
    pub async fn current_tenant(&self, team_id: &str) -> Result<Tenant> {
        self.get(&format!("/api/teams/{}/tenant", seg(team_id))).await
    }

    pub async fn my_own_team(&self) -> Result<Team> {
        self.get("/api/me/teams/own").await
    }

    /// One of my teams, with all of its properties.
    pub async fn one_of_my_teams(&self, team_id: &str) -> Result<Team> {
        self.get(&format!("/api/me/teams/{}", seg(team_id))).await
    }

    pub async fn my_teams(&self) -> Result<Vec<Team>> {
        self.get("/api/me/teams").await
    }

    pub async fn visible_api(&self, api_id: &str) -> Result<Api> {
        self.get(&format!("/api/me/visible-apis/{}", seg(api_id))).await
    }

    pub async fn team_visible_api(&self, team_id: &str, api_id: &str) -> Result<Api> {
        self.get(&format!("/api/me/teams/{}/visible-apis/{}", seg(team_id), seg(api_id)))
            .await
    }

    pub async fn my_visible_apis(&self) -> Result<Vec<Api>> {
        self.get("/api/me/visible-apis").await
    }

    pub async fn my_subscriptions(&self, api_id: &str) -> Result<Value> {
        self.get(&format!("/api/me/subscriptions/{}", seg(api_id))).await
    }
}
