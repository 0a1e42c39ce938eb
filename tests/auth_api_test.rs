mod common;

use axum::http::StatusCode;
use common::{empty_request, json_request, offline_app, send, JWT_SECRET};
use corpsite_backend::utils::token::issue_token;
use serde_json::json;

#[tokio::test]
async fn protected_endpoints_reject_missing_token() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = offline_app(dir.path(), 100);

    let payload = json!({
        "job_title_id": 1,
        "date_open": "2026-03-01",
        "date_end": "2026-03-31"
    });
    let (status, body) = send(&app, json_request("POST", "/api/jobs", None, &payload)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["Message"], "Unauthorized");
    assert_eq!(body["Error"], "missing_authorization");

    for (method, uri) in [
        ("DELETE", "/api/department-types/1"),
        ("GET", "/api/inbox"),
        ("GET", "/api/users"),
        ("PUT", "/api/solutions/images/1/cover"),
    ] {
        let (status, _) = send(&app, empty_request(method, uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
    }
}

#[tokio::test]
async fn forged_or_foreign_tokens_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = offline_app(dir.path(), 100);

    let (status, _) = send(&app, empty_request("GET", "/api/users/me", Some("not.a.jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let foreign = issue_token(1, "admin", "Admin", "some-other-secret", 1)
        .expect("token")
        .token;
    let (status, body) = send(&app, empty_request("GET", "/api/users/me", Some(&foreign))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["Error"], "invalid_token");

    // Sanity check that the secret used by the app is the one tokens are issued with.
    assert!(issue_token(1, "admin", "Admin", JWT_SECRET, 1).is_ok());
}

#[tokio::test]
async fn health_and_openapi_need_no_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = offline_app(dir.path(), 100);

    let (status, body) = send(&app, empty_request("GET", "/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, doc) = send(&app, empty_request("GET", "/api/openapi.json", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/jobs"].is_object());
    assert!(doc["paths"]["/api/solutions/images/{image_id}/cover"].is_object());
}

#[tokio::test]
async fn inbox_submissions_are_rate_limited() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = offline_app(dir.path(), 1);

    // Invalid email fails validation before any query runs.
    let submission = json!({
        "topic_id": 1,
        "name": "Visitor",
        "email": "not-an-email",
        "message": "Hello"
    });
    let (status, body) = send(&app, json_request("POST", "/api/inbox", None, &submission)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Bad request");

    let (status, body) = send(&app, json_request("POST", "/api/inbox", None, &submission)).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["Error"], "rate_limit_exceeded");
}

#[tokio::test]
async fn malformed_requests_use_the_error_envelope() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = offline_app(dir.path(), 100);
    let token = issue_token(1, "admin", "Admin", JWT_SECRET, 1)
        .expect("token")
        .token;

    // Missing `job_title_id` fails deserialization before any query runs.
    let payload = json!({
        "date_open": "2026-03-01",
        "date_end": "2026-03-31"
    });
    let (status, body) = send(&app, json_request("POST", "/api/jobs", Some(&token), &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Bad request");
    assert!(body["Error"]
        .as_str()
        .is_some_and(|detail| detail.contains("job_title_id")));

    let bad_date = json!({
        "job_title_id": 1,
        "date_open": "first of March",
        "date_end": "2026-03-31"
    });
    let (status, body) = send(&app, json_request("POST", "/api/jobs", Some(&token), &bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Bad request");

    for uri in ["/api/jobs/abc", "/api/jobs/search?date=yesterday"] {
        let (status, body) = send(&app, empty_request("GET", uri, None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["Message"], "Bad request", "{}", uri);
    }

    let (status, body) = send(
        &app,
        json_request("POST", "/api/partners", Some(&token), &json!({ "name": "Acme" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["Message"], "Bad request");
}
