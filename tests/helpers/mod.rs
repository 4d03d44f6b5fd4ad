//! In-memory `BackofficeApi` for workflow tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use backoffice::client::{ClientError, Result};
use backoffice::context::{Action, ContextStore, Navigator};
use backoffice::types::{
    ActionResponse, Api, Team, TeamPermission, TeamResponse, UnreadCount, User,
};
use backoffice::BackofficeApi;
use serde_json::{json, Value};

// ── Fixtures ───────────────────────────────────────────────────

pub fn user(id: &str) -> User {
    User::new(id, capitalise(id), format!("{}@example.com", id))
}

fn capitalise(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `payments` (t1): alice administrates, bob edits APIs, carol is a user.
pub fn payments_team() -> Team {
    let mut team = Team::new("t1", "payments")
        .with_member("alice", TeamPermission::Administrator)
        .with_member("bob", TeamPermission::ApiEditor)
        .with_member("carol", TeamPermission::User);
    team.name = "Payments".into();
    team
}

/// Logged-in store with `team` in scope and a navigation handle.
pub fn logged_in_store(who: &str, team: Team) -> (ContextStore, Navigator) {
    let history = Navigator::new();
    let store = ContextStore::with_history(history.clone());
    store.dispatch(Action::login(user(who), Some(team), None, "En"));
    (store, history)
}

// ── Fake client ────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    pub me: Option<User>,
    pub teams: Vec<Team>,
    pub my_teams: Vec<Team>,
    pub apis: Vec<Api>,
    pub members: Vec<User>,
    pub addable: Vec<User>,
    /// Unread count per team id
    pub unread: HashMap<String, u64>,
    /// Delay before answering the unread count of a team
    pub unread_delay: HashMap<String, Duration>,
    response: Mutex<Option<ActionResponse>>,
    failing: AtomicBool,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next member mutation with `response`.
    pub fn respond_with(&self, response: ActionResponse) {
        *self.response.lock().unwrap() = Some(response);
    }

    /// Make every fallible call fail as if the body were garbage.
    pub fn fail_requests(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) -> Result<()> {
        let call = call.into();
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.load(Ordering::SeqCst) {
            let source = serde_json::from_str::<Value>("<html>").unwrap_err();
            return Err(ClientError::Decode { path: call, source });
        }
        Ok(())
    }

    fn next_response(&self) -> ActionResponse {
        self.response.lock().unwrap().take().unwrap_or(ActionResponse {
            done: true,
            ..ActionResponse::default()
        })
    }
}

#[async_trait]
impl BackofficeApi for FakeApi {
    async fn me(&self) -> Result<User> {
        self.record("me")?;
        Ok(self.me.clone().unwrap_or_else(|| user("alice")))
    }

    async fn teams(&self) -> Result<Vec<Team>> {
        self.record("teams")?;
        Ok(self.teams.clone())
    }

    async fn my_teams(&self) -> Result<Vec<Team>> {
        self.record("my_teams")?;
        Ok(self.my_teams.clone())
    }

    async fn team(&self, team_id: &str) -> Result<Team> {
        self.record(format!("team {}", team_id))?;
        Ok(self
            .teams
            .iter()
            .find(|t| t.id == team_id)
            .cloned()
            .unwrap_or_else(|| Team::new(team_id, team_id)))
    }

    async fn my_visible_apis(&self) -> Result<Vec<Api>> {
        self.record("my_visible_apis")?;
        Ok(self.apis.clone())
    }

    async fn team_unread_notifications_count(&self, team_id: &str) -> UnreadCount {
        self.calls
            .lock()
            .unwrap()
            .push(format!("unread {}", team_id));
        if let Some(delay) = self.unread_delay.get(team_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return UnreadCount::default();
        }
        UnreadCount {
            count: self.unread.get(team_id).copied().unwrap_or(0),
        }
    }

    async fn members(&self, team_id: &str) -> Result<Vec<User>> {
        self.record(format!("members {}", team_id))?;
        Ok(self.members.clone())
    }

    async fn addable_users_for_team(&self, team_id: &str) -> Result<Vec<User>> {
        self.record(format!("addable {}", team_id))?;
        Ok(self.addable.clone())
    }

    async fn remove_member_from_team(&self, team_id: &str, user_id: &str) -> Result<ActionResponse> {
        self.record(format!("remove {} {}", team_id, user_id))?;
        Ok(self.next_response())
    }

    async fn add_members_to_team(&self, team_id: &str, user_ids: &[String]) -> Result<ActionResponse> {
        self.record(format!("add {} {}", team_id, user_ids.join(",")))?;
        Ok(self.next_response())
    }

    async fn update_team_member_permission(
        &self,
        team_id: &str,
        user_ids: &[String],
        permission: TeamPermission,
    ) -> Result<ActionResponse> {
        self.record(format!(
            "permission {} {} {}",
            team_id,
            user_ids.join(","),
            permission
        ))?;
        Ok(self.next_response())
    }

    async fn update_api_keys_visibility(
        &self,
        team_id: &str,
        show_api_key_only_to_admins: bool,
    ) -> Result<TeamResponse> {
        self.record(format!("visibility {} {}", team_id, show_api_key_only_to_admins))?;
        let mut team = payments_team();
        team.id = team_id.to_string();
        team.show_api_key_only_to_admins = show_api_key_only_to_admins;
        Ok(TeamResponse { team })
    }

    async fn clean_archived_subscriptions(&self, team_id: &str) -> Result<Value> {
        self.record(format!("clean {}", team_id))?;
        Ok(json!({ "done": true }))
    }

    async fn ask_for_api_access(&self, team_ids: &[String], api_id: &str) -> Result<Value> {
        self.record(format!("access {} {}", api_id, team_ids.join(",")))?;
        Ok(json!({ "done": true }))
    }
}
