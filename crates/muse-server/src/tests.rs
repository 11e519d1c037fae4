//! Router tests

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use crate::{create_router, ServerConfig};
use muse_core::Database;

fn open_router() -> Router {
    let db = Database::in_memory().unwrap();
    let config = ServerConfig {
        require_auth: false,
        allowed_origins: vec![],
        api_keys: vec![],
    };
    create_router(db, None, config)
}

fn secured_router(keys: Vec<&str>) -> Router {
    let db = Database::in_memory().unwrap();
    let config = ServerConfig {
        require_auth: true,
        allowed_origins: vec![],
        api_keys: keys.into_iter().map(String::from).collect(),
    };
    create_router(db, None, config)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn entry_payload(user: &str, date: &str, intensity: u8) -> String {
    serde_json::json!({
        "userId": user,
        "date": date,
        "mood": {
            "primary": "content",
            "intensity": intensity,
            "emoji": "😊",
            "factors": [],
            "color": "from-blue-400 to-purple-400"
        },
        "elements": [
            {"id": "el-0", "type": "text", "content": "some words for today"}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_health() {
    let response = open_router()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_auth_required_without_key() {
    let response = secured_router(vec!["sekrit"])
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_auth_accepts_valid_bearer_key() {
    let response = secured_router(vec!["sekrit"])
        .oneshot(
            Request::get("/api/health")
                .header(header::AUTHORIZATION, "Bearer sekrit")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_auth_rejects_wrong_key() {
    let response = secured_router(vec!["sekrit"])
        .oneshot(
            Request::get("/api/health")
                .header(header::AUTHORIZATION, "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_and_list_entries() {
    let app = open_router();
    let today = chrono::Utc::now().date_naive().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/entries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(entry_payload("u1", &today, 7)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["userId"], "u1");
    assert_eq!(created["mood"]["intensity"], 7);

    let response = app
        .oneshot(
            Request::get("/api/users/u1/entries?limit=10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_entry_rejects_bad_intensity() {
    let today = chrono::Utc::now().date_naive().to_string();
    let response = open_router()
        .oneshot(
            Request::post("/api/entries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(entry_payload("u1", &today, 42)))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_entry_is_404() {
    let response = open_router()
        .oneshot(
            Request::get("/api/entries/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analytics_report_shape() {
    let app = open_router();
    let today = chrono::Utc::now().date_naive().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/entries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(entry_payload("u1", &today, 8)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::get("/api/users/u1/analytics?period=week")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let report = body_json(response).await;
    assert_eq!(report["userId"], "u1");
    assert_eq!(report["period"], "week");
    assert_eq!(report["activityStats"]["totalEntries"], 1);
    assert!(report["moodTrends"].is_array());
    assert!(report["insights"].is_array());
    assert!(report.get("generatedAt").is_some());
}

#[tokio::test]
async fn test_analytics_rejects_unknown_period() {
    let response = open_router()
        .oneshot(
            Request::get("/api/users/u1/analytics?period=fortnight")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_journal_export_field_names() {
    let app = open_router();
    let today = chrono::Utc::now().date_naive().to_string();

    app.clone()
        .oneshot(
            Request::post("/api/entries")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(entry_payload("u1", &today, 6)))
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::get("/api/users/u1/export?period=week")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let export = body_json(response).await;
    assert!(export.get("insights").is_some());
    assert!(export.get("moodHistory").is_some());
    assert!(export.get("exportDate").is_some());
    let entries = export["journalEntries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["wordCount"], 4);
}

#[tokio::test]
async fn test_update_preferences_roundtrip() {
    let app = open_router();

    let prefs = serde_json::json!({
        "selectedPersona": "indie-overthinker",
        "selectedTheme": "cottagecore",
        "location": null,
        "timezone": "America/Chicago",
        "notifications": {"dailyReminder": true, "moodReminder": false, "weeklyInsights": true},
        "privacy": {"shareAnalytics": false, "publicEntries": false}
    });

    let response = app
        .clone()
        .oneshot(
            Request::put("/api/users/u1/preferences")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(prefs.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(Request::get("/api/users/u1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let user = body_json(response).await;
    assert_eq!(user["preferences"]["selectedPersona"], "indie-overthinker");
    assert_eq!(user["preferences"]["selectedTheme"], "cottagecore");
}
