//! HttpClient against a local axum server that records what it receives.

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use backoffice_client::{ClientConfig, HttpClient};
use backoffice_client::http::AssetUpload;
use backoffice_types::TeamPermission;
use serde_json::{json, Value};
use url::Url;

// ── Test server ────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    uri: String,
    headers: HeaderMap,
    body: Bytes,
}

type Log = Arc<Mutex<Vec<Seen>>>;

async fn record(
    State(log): State<Log>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let path = uri.path().to_string();
    log.lock().unwrap().push(Seen {
        method: method.clone(),
        uri: uri.to_string(),
        headers,
        body,
    });

    match (method.as_str(), path.as_str()) {
        ("GET", "/api/me") => Json(json!({
            "_id": "alice",
            "name": "Alice",
            "email": "alice@example.com",
            "isDaikokuAdmin": true
        }))
        .into_response(),
        ("GET", "/api/teams/t1/notifications/unread-count") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "count": 9 })),
        )
            .into_response(),
        ("GET", "/api/teams/t2/notifications/unread-count") => {
            Json(json!({ "count": 3 })).into_response()
        }
        ("DELETE", "/api/teams/t1/members/bob") => (
            StatusCode::CONFLICT,
            Json(json!({ "done": false, "error": "last admin" })),
        )
            .into_response(),
        ("GET", "/api/teams/broken") => "<html>oops</html>".into_response(),
        _ => Json(json!({ "done": true })).into_response(),
    }
}

async fn serve() -> (HttpClient, Log) {
    serve_with(|config| config).await
}

async fn serve_with(configure: impl FnOnce(ClientConfig) -> ClientConfig) -> (HttpClient, Log) {
    let log: Log = Arc::default();
    let app = Router::new().fallback(record).with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = Url::parse(&format!("http://{}/", addr)).unwrap();
    let client = HttpClient::new(&configure(ClientConfig::new(base))).unwrap();
    (client, log)
}

fn last(log: &Log) -> Seen {
    log.lock().unwrap().last().cloned().unwrap()
}

// ── Tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn me_sends_session_cookie_and_accept_header() {
    let (client, log) =
        serve_with(|config| config.with_session_cookie("daikoku-session=abc123")).await;

    let me = client.me().await.unwrap();
    assert_eq!(me.id, "alice");
    assert!(me.is_daikoku_admin);

    let seen = last(&log);
    assert_eq!(seen.method, Method::GET);
    assert_eq!(seen.headers["accept"], "application/json");
    let cookie = seen.headers["cookie"].to_str().unwrap();
    assert!(cookie.contains("daikoku-session=abc123"));
}

#[tokio::test]
async fn unread_count_falls_back_to_zero_on_error_status() {
    let (client, _) = serve().await;

    assert_eq!(client.team_unread_notifications_count("t1").await.count, 0);
    assert_eq!(client.team_unread_notifications_count("t2").await.count, 3);
}

#[tokio::test]
async fn unread_count_falls_back_to_zero_when_unreachable() {
    // grab a free port and close it again
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{}", addr)).unwrap();
    let client = HttpClient::new(&ClientConfig::new(base)).unwrap();
    assert_eq!(client.team_unread_notifications_count("t1").await.count, 0);
}

#[tokio::test]
async fn refusal_body_is_parsed_whatever_the_status() {
    let (client, log) = serve().await;

    let resp = client.remove_member_from_team("t1", "bob").await.unwrap();
    assert!(!resp.done);
    assert_eq!(resp.error.as_deref(), Some("last admin"));

    let seen = last(&log);
    assert_eq!(seen.method, Method::DELETE);
    assert_eq!(seen.uri, "/api/teams/t1/members/bob");
}

#[tokio::test]
async fn ids_are_percent_encoded_in_paths() {
    let (client, log) = serve().await;

    let resp = client.remove_member_from_team("t/1", "bob?admin=1").await.unwrap();
    assert!(resp.done);

    let seen = last(&log);
    assert_eq!(seen.method, Method::DELETE);
    assert_eq!(seen.uri, "/api/teams/t%2F1/members/bob%3Fadmin%3D1");
}

#[tokio::test]
async fn member_mutations_send_json_bodies() {
    let (client, log) = serve().await;

    client
        .add_members_to_team("t1", &["bob".to_string(), "carol".to_string()])
        .await
        .unwrap();
    let seen = last(&log);
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.uri, "/api/teams/t1/members");
    let body: Value = serde_json::from_slice(&seen.body).unwrap();
    assert_eq!(body, json!({ "members": ["bob", "carol"] }));

    client
        .update_team_member_permission("t1", &["bob".to_string()], TeamPermission::ApiEditor)
        .await
        .unwrap();
    let seen = last(&log);
    assert_eq!(seen.uri, "/api/teams/t1/members/_permission");
    let body: Value = serde_json::from_slice(&seen.body).unwrap();
    assert_eq!(body, json!({ "members": ["bob"], "permission": "ApiEditor" }));
}

#[tokio::test]
async fn api_keys_visibility_is_a_post() {
    let (client, log) = serve().await;

    // the fallback answers `{done: true}`, which is not a team
    let err = client.update_api_keys_visibility("t1", true).await.unwrap_err();
    assert!(err.is_decode());

    let seen = last(&log);
    assert_eq!(seen.method, Method::POST);
    assert_eq!(seen.uri, "/api/teams/t1/apiKeys/visibility");
    let body: Value = serde_json::from_slice(&seen.body).unwrap();
    assert_eq!(body, json!({ "showApiKeyOnlyToAdmins": true }));
}

#[tokio::test]
async fn asset_upload_carries_metadata_and_content_type() {
    let (client, log) = serve().await;

    client
        .store_asset(
            "t1",
            AssetUpload {
                filename: "logo.png".into(),
                title: "Logo".into(),
                description: "teamlogo".into(),
                content_type: "image/png".into(),
                bytes: vec![0x89, b'P', b'N', b'G'],
            },
        )
        .await
        .unwrap();

    let seen = last(&log);
    assert_eq!(seen.method, Method::POST);
    assert_eq!(
        seen.uri,
        "/api/teams/t1/assets?filename=logo.png&title=Logo&desc=teamlogo"
    );
    assert_eq!(seen.headers["content-type"], "image/png");
    assert_eq!(seen.headers["asset-content-type"], "image/png");
    assert_eq!(&seen.body[..], &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn undecodable_body_reports_the_path() {
    let (client, _) = serve().await;

    let err = client.team("broken").await.unwrap_err();
    assert!(err.is_decode());
    assert_eq!(err.path(), Some("/api/teams/broken"));
}
