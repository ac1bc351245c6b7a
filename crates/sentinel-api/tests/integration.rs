//! Integration tests for the sentinel API
//!
//! Drives the assembled router end to end with in-process requests and
//! checks the serialized report contract on every endpoint.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use sentinel_api::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::from_env().unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_audit_single_cost_violation() {
    let (status, report) = post_json(
        app(),
        "/audit",
        json!({"activity_logs": "Agent-A: Called gpt-4 500 times in 10 min, cost $750.00"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["risk_score"], 50);
    assert_eq!(report["violations"].as_array().unwrap().len(), 1);
    assert_eq!(report["violations"][0]["type"], "COST_SPIKE");
    assert_eq!(report["violations"][0]["severity"], "CRITICAL");
    assert_eq!(report["violations"][0]["agent_id"], "Agent-A");
    assert_eq!(report["agents_audited"], json!(["Agent-A"]));
}

#[tokio::test]
async fn test_audit_empty_logs_is_zero_risk() {
    let (status, report) = post_json(app(), "/audit", json!({"activity_logs": "   \n  \n"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["risk_score"], 0);
    assert_eq!(report["violations"], json!([]));
    assert_eq!(report["agents_audited"], json!([]));
    assert_eq!(report["summary"], "No activity logs provided for audit.");
}

#[tokio::test]
async fn test_audit_saturates_at_one_hundred() {
    let logs = "Agent-B: Attempted unauthorized access to production database\n\
                Agent-B: API_KEY exposed in logs";
    let (_, report) = post_json(app(), "/audit", json!({"activity_logs": logs})).await;

    assert_eq!(report["risk_score"], 100);
    assert_eq!(report["violations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_audit_use_ai_without_credential_falls_back() {
    // With no credential configured the model path is disabled, so the
    // response must equal the deterministic rule-engine report.
    let logs = "Agent-A: permission denied on vault";
    let (_, with_ai) =
        post_json(app(), "/audit", json!({"activity_logs": logs, "use_ai": true})).await;
    let (_, without_ai) = post_json(app(), "/audit", json!({"activity_logs": logs})).await;

    assert_eq!(with_ai, without_ai);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, health) = get(app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["components"]["rule_engine"], true);
}

#[tokio::test]
async fn test_sample_data_classifies_cleanly() {
    let (status, sample) = get(app(), "/sample-data").await;
    assert_eq!(status, StatusCode::OK);

    let logs = sample["logs"].as_str().unwrap();
    let (_, report) = post_json(app(), "/audit", json!({"activity_logs": logs})).await;

    assert_eq!(report["risk_score"], 100);
    assert_eq!(report["agents_audited"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_api_info_endpoint() {
    let (status, info) = get(app(), "/api").await;

    assert_eq!(status, StatusCode::OK);
    assert!(info["endpoints"]["/audit"]
        .as_str()
        .unwrap()
        .starts_with("POST"));
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_counters() {
    let state = AppState::from_env().unwrap();
    let router = create_router(state.clone());

    let (_, _) = post_json(
        router.clone(),
        "/audit",
        json!({"activity_logs": "Agent-A: cost hit $40"}),
    )
    .await;

    let response = router
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("sentinel_audits_total 1"));
}

#[tokio::test]
async fn test_mcp_tool_roundtrip() {
    let (_, listing) = post_json(
        app(),
        "/mcp",
        json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
    )
    .await;
    assert_eq!(listing["result"]["tools"][0]["name"], "audit_agent_activity");

    let (_, call) = post_json(
        app(),
        "/mcp",
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "method": "tools/call",
            "params": {
                "name": "audit_agent_activity",
                "arguments": {"activity_logs": "Agent-C: 850 requests in 8 min"}
            }
        }),
    )
    .await;

    let text = call["result"]["content"][0]["text"].as_str().unwrap();
    let report: Value = serde_json::from_str(text).unwrap();
    assert_eq!(report["violations"][0]["type"], "RATE_LIMIT");
}

#[tokio::test]
async fn test_malformed_audit_body_is_client_error() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/audit")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"activity_logs\": 42}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
