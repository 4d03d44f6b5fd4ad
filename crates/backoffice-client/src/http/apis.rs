//! API and documentation endpoints.

use backoffice_types::Api;
use serde_json::{json, Value};

use super::{HttpClient, seg};
use crate::Result;

impl HttpClient {
    pub async fn subscribed_apis(&self, team_id: &str) -> Result<Vec<Api>> {
        self.get(&format!("/api/teams/{}/subscribed-apis", seg(team_id)))
            .await
    }

    pub async fn team_api(&self, team_id: &str, api_id: &str) -> Result<Api> {
        self.get(&format!("/api/teams/{}/apis/{}", seg(team_id), seg(api_id)))
            .await
    }

    pub async fn team_apis(&self, team_id: &str) -> Result<Vec<Api>> {
        self.get(&format!("/api/teams/{}/apis", seg(team_id))).await
    }

    pub async fn create_team_api(&self, team_id: &str, api: &Api) -> Result<Api> {
        self.post(&format!("/api/teams/{}/apis", seg(team_id)), api)
            .await
    }

    pub async fn save_team_api(&self, team_id: &str, api: &Api) -> Result<Api> {
        self.put(&format!("/api/teams/{}/apis/{}", seg(team_id), seg(&api.id)), api)
            .await
    }

    pub async fn delete_team_api(&self, team_id: &str, api_id: &str) -> Result<Value> {
        self.delete(&format!("/api/teams/{}/apis/{}", seg(team_id), seg(api_id)))
            .await
    }

    /// `{ "exists": bool }` for a candidate API name within the team's tenant.
    pub async fn check_api_name_unique(&self, team_id: &str, name: &str) -> Result<Value> {
        self.post(
            &format!("/api/teams/{}/apis/_names", seg(team_id)),
            &json!({ "name": name }),
        )
        .await
    }

    pub async fn ask_for_api_access(&self, team_ids: &[String], api_id: &str) -> Result<Value> {
        self.post(
            &format!("/api/apis/{}/access", seg(api_id)),
            &json!({ "teams": team_ids }),
        )
        .await
    }

    pub async fn api_categories(&self) -> Result<Value> {
        self.get("/api/categories").await
    }

    pub async fn save_api_translations(
        &self,
        team_id: &str,
        api_id: &str,
        translations: &Value,
    ) -> Result<Value> {
        self.post(
            &format!("/api/teams/{}/apis/{}/_translate", seg(team_id), seg(api_id)),
            translations,
        )
        .await
    }

    // ── Documentation pages ────────────────────────────────────

    pub async fn doc_page(&self, api_id: &str, page_id: &str) -> Result<Value> {
        self.get(&format!("/api/apis/{}/pages/{}", seg(api_id), seg(page_id)))
            .await
    }

    pub async fn doc_details(&self, api_id: &str) -> Result<Value> {
        self.get(&format!("/api/apis/{}/doc", seg(api_id))).await
    }

    pub async fn reorder_doc(&self, team_id: &str, api_id: &str) -> Result<Value> {
        self.post(
            &format!("/api/teams/{}/apis/{}/pages/_reorder", seg(team_id), seg(api_id)),
            &json!({}),
        )
        .await
    }

    pub async fn create_doc_page(&self, team_id: &str, page: &Value) -> Result<Value> {
        self.post(&format!("/api/teams/{}/pages", seg(team_id)), page)
            .await
    }

    pub async fn save_doc_page(&self, team_id: &str, page_id: &str, page: &Value) -> Result<Value> {
        self.put(&format!("/api/teams/{}/pages/{}", seg(team_id), seg(page_id)), page)
            .await
    }

    pub async fn delete_doc_page(&self, team_id: &str, page_id: &str) -> Result<Value> {
        self.delete(&format!("/api/teams/{}/pages/{}", seg(team_id), seg(page_id)))
            .await
    }
}
