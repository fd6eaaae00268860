//! End-to-end API integration tests
//!
//! These tests drive the full HTTP surface against an in-memory
//! orchestrator with the default crew writing into a temp directory:
//! - task submission and result envelopes
//! - worker status snapshots
//! - message history and clearing
//! - error mapping for malformed input and unknown routes

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use siteforge_api::agents::{crew, Orchestrator};
use siteforge_api::api;
use tempfile::TempDir;
use tokio::sync::Mutex;
use tower::util::ServiceExt; // for oneshot

/// Setup test application with the default crew writing into a temp dir
fn setup_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut orchestrator = Orchestrator::new();
    for worker in crew::default_crew(dir.path()) {
        orchestrator.register_worker(worker);
    }

    (api::router(Arc::new(Mutex::new(orchestrator))), dir)
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _dir) = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_composite_task_runs_all_five_subtasks() {
    let (app, dir) = setup_app();

    let payload = json!({
        "type": "website_development",
        "description": "Develop and optimize the company website",
        "priority": "high"
    });

    let response = app.oneshot(post_json("/api/task", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r["success"] == true));

    // architecture routed to the Architect, design to the Designer
    assert_eq!(results[0]["subtask"]["category"], "architecture");
    assert_eq!(results[0]["worker"], "Architect");
    assert_eq!(results[1]["subtask"]["category"], "design");
    assert_eq!(results[1]["worker"], "Designer");

    // workers actually wrote their artifacts
    assert!(dir.path().join("docs/architecture.md").exists());
    assert!(dir.path().join("sitemap.xml").exists());
}

#[tokio::test]
async fn test_status_reflects_completed_run() {
    let (app, _dir) = setup_app();

    let payload = json!({
        "type": "seo",
        "description": "Audit search rankings"
    });
    app.clone()
        .oneshot(post_json("/api/task", &payload))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let status = json["status"].as_object().unwrap();
    assert_eq!(status.len(), 5);
    assert_eq!(status["SEO Specialist"]["tasks_completed"], 1);

    // every worker is idle after the run
    for (_, report) in status {
        assert_eq!(report["status"], "idle");
    }

    // capability lists ride along in the snapshot
    assert!(status["Designer"]["capabilities"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c == "design"));
}

#[tokio::test]
async fn test_messages_and_clear() {
    let (app, _dir) = setup_app();

    let payload = json!({
        "type": "design",
        "description": "Refresh the landing page"
    });
    app.clone()
        .oneshot(post_json("/api/task", &payload))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/messages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    let messages = json["messages"].as_array().unwrap();
    assert!(!messages.is_empty());
    assert_eq!(messages[0]["type"], "task");
    assert!(messages[0]["body"]
        .as_str()
        .unwrap()
        .starts_with("TASK ASSIGNED:"));

    // clear, then the log is empty
    let response = app
        .clone()
        .oneshot(post_json("/api/clear", &json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/messages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_json(response).await;
    assert!(json["messages"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_task_type_is_rejected() {
    let (app, _dir) = setup_app();

    let payload = json!({
        "type": "billing",
        "description": "Not a thing we do"
    });

    let response = app.oneshot(post_json("/api/task", &payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (app, _dir) = setup_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Not found");
}
