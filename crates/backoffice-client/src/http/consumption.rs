//! Consumption, billing and income endpoints.
//!
//! Ranges are sent as epoch milliseconds.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::{HttpClient, seg};
use crate::Result;

fn range(from: DateTime<Utc>, to: DateTime<Utc>) -> [(&'static str, i64); 2] {
    [("from", from.timestamp_millis()), ("to", to.timestamp_millis())]
}

impl HttpClient {
    pub async fn api_key_consumption(
        &self,
        client_id: &str,
        team_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.get_query(
            &format!("/api/teams/{}/apiKey/{}/consumption", seg(team_id), seg(client_id)),
            &range(from, to),
        )
        .await
    }

    pub async fn sync_api_key_consumption(&self, client_id: &str, team_id: &str) -> Result<Value> {
        self.post_action(&format!(
            "/api/teams/{}/apiKey/{}/consumption/_sync",
            seg(team_id), seg(client_id)
        ))
        .await
    }

    pub async fn plan_informations(&self, client_id: &str, team_id: &str) -> Result<Value> {
        self.get(&format!(
            "/api/teams/{}/apiKey/{}/informations",
            seg(team_id), seg(client_id)
        ))
        .await
    }

    pub async fn api_consumption(
        &self,
        api_id: &str,
        plan_id: &str,
        team_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.get_query(
            &format!(
                "/api/teams/{}/apis/{}/plan/{}/consumption",
                seg(team_id), seg(api_id), seg(plan_id)
            ),
            &range(from, to),
        )
        .await
    }

    pub async fn api_global_consumption(
        &self,
        api_id: &str,
        team_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.get_query(
            &format!("/api/teams/{}/apis/{}/consumption", seg(team_id), seg(api_id)),
            &range(from, to),
        )
        .await
    }

    pub async fn sync_api_consumption(&self, api_id: &str, team_id: &str) -> Result<Value> {
        self.post_action(&format!(
            "/api/teams/{}/apis/{}/consumption/_sync",
            seg(team_id), seg(api_id)
        ))
        .await
    }

    pub async fn team_consumptions(
        &self,
        team_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.get_query(
            &format!("/api/teams/{}/consumptions", seg(team_id)),
            &range(from, to),
        )
        .await
    }

    pub async fn team_billings(
        &self,
        team_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.get_query(&format!("/api/teams/{}/billings", seg(team_id)), &range(from, to))
            .await
    }

    pub async fn sync_team_billing(&self, team_id: &str) -> Result<Value> {
        self.post_action(&format!("/api/teams/{}/billing/_sync", seg(team_id)))
            .await
    }

    pub async fn team_income(
        &self,
        team_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Value> {
        self.get_query(&format!("/api/teams/{}/income", seg(team_id)), &range(from, to))
            .await
    }

    pub async fn sync_team_income(&self, team_id: &str) -> Result<Value> {
        self.post_action(&format!("/api/teams/{}/income/_sync", seg(team_id)))
            .await
    }
}
