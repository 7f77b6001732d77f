//! End-to-end API tests against a mock GitHub server.
//!
//! A `wiremock::MockServer` plays the GitHub REST API; the real router is
//! served on an ephemeral port and exercised over HTTP with `reqwest`.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repo_health::GithubClient;

/// Serve the app against the given GitHub base URL, returning its address.
async fn spawn_app(github_url: &str) -> String {
    let client = GithubClient::new(github_url, None, Duration::from_secs(5)).unwrap();
    let app = repo_health::app(Arc::new(client));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn commit_json(date: &str) -> Value {
    json!({
        "sha": "abc123",
        "commit": { "author": { "name": "dev", "date": date } }
    })
}

#[tokio::test]
async fn status_endpoint_reports_running() {
    let server = MockServer::start().await;
    let app = spawn_app(&server.uri()).await;

    let body: Value = reqwest::get(format!("{}/", app))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body, json!({ "status": "API running" }));
}

#[tokio::test]
async fn commit_activity_happy_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/commits"))
        .and(query_param("per_page", "100"))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            commit_json("2024-03-02T12:00:00Z"),
            commit_json("2024-03-01T08:30:00Z"),
            commit_json("2024-03-01T17:45:00Z"),
        ])))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let response = reqwest::get(format!("{}/commits/octocat/hello", app))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "dates": ["2024-03-01", "2024-03-02"],
            "counts": [2, 1],
            "total_commits": 3
        })
    );
}

#[tokio::test]
async fn commit_activity_skips_records_without_dates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            commit_json("2024-03-01T08:30:00Z"),
            { "sha": "noauthor", "commit": { "author": null } },
            { "sha": "nocommit" },
        ])))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let body: Value = reqwest::get(format!("{}/commits/octocat/hello", app))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_commits"], 1);
    assert_eq!(body["counts"], json!([1]));
}

#[tokio::test]
async fn commit_check_counts_one_page() {
    let server = MockServer::start().await;

    // Oversized per_page values are clamped to GitHub's maximum of 100.
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/commits"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            commit_json("2024-03-01T08:30:00Z"),
            commit_json("2024-03-02T09:00:00Z"),
        ])))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let body: Value = reqwest::get(format!("{}/commits/octocat/hello/check?per_page=500", app))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({ "owner": "octocat", "repo": "hello", "commit_count": 2 })
    );
}

#[tokio::test]
async fn contributor_breakdown_happy_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/contributors"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "login": "a", "contributions": 100 },
            { "login": "b", "contributions": 50 },
            { "login": "c", "contributions": 50 },
        ])))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let body: Value = reqwest::get(format!("{}/contributors/octocat/hello", app))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total_contributions"], 200);
    assert_eq!(body["top_contributor_percentage"], 50.0);
    assert_eq!(body["bus_factor"], 1);
    assert_eq!(body["contributors"][0]["login"], "a");
    assert_eq!(body["contributors"][0]["percentage"], 50.0);
    assert_eq!(body["contributors"][1]["percentage"], 25.0);
}

#[tokio::test]
async fn upstream_not_found_maps_to_404_with_repo_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/missing/commits"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let response = reqwest::get(format!("{}/commits/octocat/missing", app))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("octocat/missing"), "got: {}", message);
}

#[tokio::test]
async fn contributor_failures_use_same_policy_as_commits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/missing/contributors"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let response = reqwest::get(format!("{}/contributors/octocat/missing", app))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("octocat/missing"));
}

#[tokio::test]
async fn rate_limited_403_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello/commits"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for 1.2.3.4"
        })))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let response = reqwest::get(format!("{}/commits/octocat/hello", app))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.unwrap();
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("rate limit"), "got: {}", message);
}

#[tokio::test]
async fn health_reports_rate_limit_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {
                "core": { "limit": 60, "remaining": 42, "used": 18, "reset": 1700000000 }
            }
        })))
        .mount(&server)
        .await;

    let app = spawn_app(&server.uri()).await;

    let body: Value = reqwest::get(format!("{}/health", app))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["token_configured"], false);
    assert_eq!(
        body["rate_limit"],
        json!({ "limit": 60, "remaining": 42, "reset_at": 1700000000 })
    );
}

#[tokio::test]
async fn health_degrades_when_upstream_unreachable() {
    // Nothing listens on this address, so the probe fails to connect.
    let app = spawn_app("http://127.0.0.1:1").await;

    let response = reqwest::get(format!("{}/health", app)).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rate_limit"], Value::Null);
}
