//! Administration endpoints: users, sessions, audit trail, Otoroshi
//! settings, entity templates, search and state import.

use backoffice_types::User;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::{HttpClient, NDJSON, NO_QUERY, seg};
use crate::Result;

/// Kinds of blank entity the server can template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tenant,
    Team,
    Api,
    User,
    Otoroshi,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Team => "team",
            Self::Api => "api",
            Self::User => "user",
            Self::Otoroshi => "otoroshi",
        }
    }
}

impl HttpClient {
    pub async fn audit_trail(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        page: u32,
        size: u32,
    ) -> Result<Value> {
        self.get_query(
            "/api/admin/auditTrail",
            &[
                ("from", from.timestamp_millis()),
                ("to", to.timestamp_millis()),
                ("page", i64::from(page)),
                ("size", i64::from(size)),
            ],
        )
        .await
    }

    // ── Users ──────────────────────────────────────────────────

    pub async fn all_users(&self) -> Result<Vec<User>> {
        self.get("/api/admin/users").await
    }

    pub async fn find_user(&self, user_id: &str) -> Result<User> {
        self.get(&format!("/api/admin/users/{}", seg(user_id))).await
    }

    pub async fn create_user(&self, user: &User) -> Result<User> {
        self.post("/api/admin/users", user).await
    }

    pub async fn update_user(&self, user: &User) -> Result<User> {
        self.put(&format!("/api/admin/users/{}", seg(&user.id)), user)
            .await
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<Value> {
        self.delete(&format!("/api/admin/users/{}", seg(user_id)))
            .await
    }

    // ── Sessions ───────────────────────────────────────────────

    pub async fn sessions(&self) -> Result<Value> {
        self.get("/api/admin/sessions").await
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<Value> {
        self.delete(&format!("/api/admin/sessions/{}", seg(session_id)))
            .await
    }

    pub async fn delete_sessions(&self) -> Result<Value> {
        self.delete("/api/admin/sessions").await
    }

    // ── Otoroshi settings ──────────────────────────────────────

    pub async fn all_otoroshis(&self) -> Result<Vec<Value>> {
        self.get("/api/teams/otoroshis").await
    }

    pub async fn one_otoroshi(&self, id: &str) -> Result<Value> {
        self.get(&format!("/api/teams/otoroshis/{}", seg(id))).await
    }

    pub async fn create_otoroshi_settings(&self, settings: &Value) -> Result<Value> {
        self.post("/api/teams/otoroshis", settings).await
    }

    pub async fn save_otoroshi_settings(&self, id: &str, settings: &Value) -> Result<Value> {
        self.put(&format!("/api/teams/otoroshis/{}", seg(id)), settings)
            .await
    }

    pub async fn delete_otoroshi_settings(&self, id: &str) -> Result<Value> {
        self.delete(&format!("/api/teams/otoroshis/{}", seg(id))).await
    }

    // ── Misc ───────────────────────────────────────────────────

    /// A blank entity with server-side defaults, ready to be edited and created.
    pub async fn new_entity(&self, kind: EntityKind) -> Result<Value> {
        self.get(&format!("/api/entities/{}", kind.as_str())).await
    }

    pub async fn search(&self, query: &str) -> Result<Value> {
        self.post("/api/_search", &json!({ "search": query })).await
    }

    pub async fn translations(&self) -> Result<Value> {
        self.get("/api/translations").await
    }

    /// Import a state export (newline-delimited JSON).
    pub async fn upload_export_file(&self, ndjson: Vec<u8>) -> Result<Value> {
        self.post_bytes("/api/state/import", NO_QUERY, NDJSON, false, ndjson)
            .await
    }
}
