//! Home page, API keys and team switching against an in-memory back-office.

mod helpers;

use std::time::Duration;

use backoffice::types::{Api, ApiVisibility, Team, TeamPermission};
use backoffice::workflows::{clean_archived_subscriptions, update_team, Home, WorkflowError};
use backoffice::{Action, ContextStore, Navigator};
use helpers::{logged_in_store, payments_team, user, FakeApi};

fn home_api() -> FakeApi {
    let mut api = FakeApi::new();
    let other = Team::new("t2", "logistics").with_member("dave", TeamPermission::Administrator);
    api.teams = vec![payments_team(), other];
    api.my_teams = vec![payments_team()];

    let mut private = Api::new("a2", "routing", "t2");
    private.visibility = ApiVisibility::Private;
    api.apis = vec![Api::new("a1", "billing", "t1"), private];
    api
}

// ── Home ───────────────────────────────────────────────────────

#[tokio::test]
async fn home_loads_apis_and_teams() {
    let api = home_api();
    let (store, _) = logged_in_store("alice", payments_team());
    let mut home = Home::new(&api, &store);

    let data = home.load().await.unwrap();
    assert_eq!(data.apis.len(), 2);
    assert_eq!(data.teams.len(), 2);
    assert_eq!(data.my_teams.len(), 1);
}

#[tokio::test]
async fn api_page_opens_only_when_reachable() {
    let api = home_api();
    let (store, history) = logged_in_store("alice", payments_team());
    let mut home = Home::new(&api, &store);
    home.load().await.unwrap();

    let billing = home.data().apis[0].clone();
    let routing = home.data().apis[1].clone();

    assert_eq!(home.open_api_page(&billing).as_deref(), Some("/payments/billing"));
    assert_eq!(home.open_api_page(&routing), None);
    assert_eq!(history.entries(), vec!["/payments/billing".to_string()]);

    let team = home.data().teams[1].clone();
    assert_eq!(home.open_team_page(&team), "/logistics");
    assert_eq!(history.location().as_deref(), Some("/logistics"));
}

#[tokio::test]
async fn api_editor_switches_team_before_navigating() {
    let mut api = home_api();
    api.unread.insert("t1".into(), 2);
    // logged in with some other team in scope
    let (store, history) = logged_in_store("alice", Team::new("t9", "elsewhere"));
    let mut home = Home::new(&api, &store);
    home.load().await.unwrap();

    let billing = home.data().apis[0].clone();
    let path = home.open_api_editor(&billing).await.unwrap();

    assert_eq!(path, "/payments/settings/apis/billing/infos");
    assert_eq!(history.location().as_deref(), Some(path.as_str()));
    let ctx = store.snapshot();
    assert_eq!(ctx.current_team.as_ref().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(ctx.unread_notifications_count, 2);
}

#[tokio::test]
async fn api_editor_denied_outside_my_teams() {
    let api = home_api();
    let (store, history) = logged_in_store("alice", payments_team());
    let mut home = Home::new(&api, &store);
    home.load().await.unwrap();

    let routing = home.data().apis[1].clone();
    let err = home.open_api_editor(&routing).await.unwrap_err();

    assert!(matches!(err, WorkflowError::Denied(_)));
    assert!(history.entries().is_empty());
}

#[tokio::test]
async fn api_editor_denied_for_plain_members() {
    let api = home_api();
    let (store, _) = logged_in_store("carol", payments_team());
    let mut home = Home::new(&api, &store);
    home.load().await.unwrap();

    let billing = home.data().apis[0].clone();
    let err = home.open_api_editor(&billing).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Denied(_)));
}

#[tokio::test]
async fn asking_for_access_reloads() {
    let api = home_api();
    let (store, _) = logged_in_store("alice", payments_team());
    let mut home = Home::new(&api, &store);
    home.load().await.unwrap();

    let routing = home.data().apis[1].clone();
    home.ask_for_api_access(&routing, &["t1".to_string()])
        .await
        .unwrap();

    let calls = api.calls();
    assert!(calls.contains(&"access a2 t1".to_string()));
    assert_eq!(calls.iter().filter(|c| c.as_str() == "my_visible_apis").count(), 2);
}

// ── API keys ───────────────────────────────────────────────────

#[tokio::test]
async fn cleaning_archived_keys_needs_manage_rights() {
    let api = FakeApi::new();

    let (store, _) = logged_in_store("carol", payments_team());
    let err = clean_archived_subscriptions(&api, &store).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Denied(_)));

    let (store, _) = logged_in_store("alice", payments_team());
    let resp = clean_archived_subscriptions(&api, &store).await.unwrap();
    assert_eq!(resp["done"], true);
    assert_eq!(api.calls(), vec!["clean t1".to_string()]);
}

#[tokio::test]
async fn logged_out_store_cannot_clean_keys() {
    let api = FakeApi::new();
    let store = ContextStore::new();
    let err = clean_archived_subscriptions(&api, &store).await.unwrap_err();
    assert!(matches!(err, WorkflowError::NotLoggedIn));
}

// ── Overlapping team switches ──────────────────────────────────

fn slow_first_team() -> FakeApi {
    let mut api = FakeApi::new();
    api.unread_delay.insert("slow".into(), Duration::from_millis(50));
    api
}

#[tokio::test]
async fn overlapping_updates_are_last_write_wins_by_default() {
    let api = slow_first_team();
    let store = ContextStore::new();

    let (a, b) = tokio::join!(
        update_team(&api, &store, Team::new("slow", "slow")),
        update_team(&api, &store, Team::new("fast", "fast")),
    );

    assert!(a && b);
    let current = store.snapshot().current_team.unwrap();
    assert_eq!(current.id, "slow");
}

#[tokio::test]
async fn stale_guard_keeps_the_newest_team() {
    let api = slow_first_team();
    let store = ContextStore::new().guard_stale_updates(true);

    let (a, b) = tokio::join!(
        update_team(&api, &store, Team::new("slow", "slow")),
        update_team(&api, &store, Team::new("fast", "fast")),
    );

    assert!(!a);
    assert!(b);
    let current = store.snapshot().current_team.unwrap();
    assert_eq!(current.id, "fast");
}

#[tokio::test]
async fn api_editor_not_opened_when_its_team_switch_is_superseded() {
    let mut api = home_api();
    api.unread_delay.insert("t1".into(), Duration::from_millis(50));
    let history = Navigator::new();
    let store = ContextStore::with_history(history.clone()).guard_stale_updates(true);
    store.dispatch(Action::login(
        user("alice"),
        Some(Team::new("t9", "elsewhere")),
        None,
        "En",
    ));
    let mut home = Home::new(&api, &store);
    home.load().await.unwrap();
    let billing = home.data().apis[0].clone();

    let (opened, switched) = tokio::join!(
        home.open_api_editor(&billing),
        update_team(&api, &store, Team::new("t2", "logistics")),
    );

    assert!(switched);
    assert!(matches!(opened, Err(WorkflowError::Superseded { ref team }) if team == "t1"));
    assert!(history.entries().is_empty());
    assert_eq!(store.snapshot().current_team.unwrap().id, "t2");
}

#[tokio::test]
async fn unread_count_failure_still_switches_team() {
    let api = FakeApi::new();
    api.fail_requests();
    let store = ContextStore::new();
    store.dispatch(Action::update_notifs(7));

    assert!(update_team(&api, &store, Team::new("t1", "payments")).await);

    let ctx = store.snapshot();
    assert_eq!(ctx.current_team.unwrap().id, "t1");
    assert_eq!(ctx.unread_notifications_count, 0);
}
