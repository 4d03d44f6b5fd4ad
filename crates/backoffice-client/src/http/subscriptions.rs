//! Subscriptions (API keys) and the testing console.

use backoffice_types::Subscription;
use serde_json::{json, Value};

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn team_subscriptions(&self, api_id: &str, team_id: &str) -> Result<Vec<Subscription>> {
        self.get(&format!(
            "/api/apis/{}/subscriptions/teams/{}",
            seg(api_id), seg(team_id)
        ))
        .await
    }

    /// Ask for a key on `plan` for each of `team_ids`.
    pub async fn ask_for_api_key(
        &self,
        api_id: &str,
        team_ids: &[String],
        plan: &str,
    ) -> Result<Value> {
        self.post(
            &format!("/api/apis/{}/subscriptions", seg(api_id)),
            &json!({ "plan": plan, "teams": team_ids }),
        )
        .await
    }

    pub async fn delete_api_key(&self, team_id: &str, subscription_id: &str) -> Result<Value> {
        self.delete(&format!(
            "/api/teams/{}/subscriptions/{}/_delete",
            seg(team_id), seg(subscription_id)
        ))
        .await
    }

    /// Archive (`enabled = false`) or restore a key.
    pub async fn archive_api_key(
        &self,
        team_id: &str,
        subscription_id: &str,
        enabled: bool,
    ) -> Result<Value> {
        self.put_action(
            &format!(
                "/api/teams/{}/subscriptions/{}/_archive",
                seg(team_id), seg(subscription_id)
            ),
            &[("enabled", enabled)],
        )
        .await
    }

    pub async fn clean_archived_subscriptions(&self, team_id: &str) -> Result<Value> {
        self.delete(&format!("/api/teams/{}/subscriptions/_clean", seg(team_id)))
            .await
    }

    pub async fn update_subscription_custom_name(
        &self,
        team_id: &str,
        subscription_id: &str,
        custom_name: &str,
    ) -> Result<Value> {
        self.post(
            &format!(
                "/api/teams/{}/subscriptions/{}/name",
                seg(team_id), seg(subscription_id)
            ),
            &json!({ "customName": custom_name }),
        )
        .await
    }

    pub async fn create_testing_api_key(&self, team_id: &str, body: &Value) -> Result<Value> {
        self.post(&format!("/api/teams/{}/testing/apikeys", seg(team_id)), body)
            .await
    }

    pub async fn testing_call(&self, team_id: &str, api_id: &str, body: &Value) -> Result<Value> {
        self.post(
            &format!("/api/teams/{}/testing/{}/call", seg(team_id), seg(api_id)),
            body,
        )
        .await
    }
}
