use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    TEST_ALBUM_ID, TEST_API_KEY, spawn_app, spawn_app_with_unreachable_upstream,
    spawn_app_without_album,
};

#[tokio::test]
async fn like_and_dislike_acknowledge_without_touching_upstream() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for endpoint in ["/like", "/dislike"] {
        let response = client
            .post(app.api_url(endpoint))
            .json(&serde_json::json!({ "id": "asset-1" }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["success"], true);
    }

    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn action_endpoints_reject_missing_or_empty_id() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for endpoint in ["/like", "/dislike", "/superlike", "/delete"] {
        for payload in [serde_json::json!({}), serde_json::json!({ "id": "" })] {
            let response = client
                .post(app.api_url(endpoint))
                .json(&payload)
                .send()
                .await
                .expect("Failed to execute request");

            assert_eq!(
                response.status(),
                400,
                "{endpoint} should reject payload {payload}"
            );
        }
    }

    // Validation happens before any outbound call
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn superlike_without_configured_album_is_server_error() {
    let app = spawn_app_without_album().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.api_url("/superlike"))
        .json(&serde_json::json!({ "id": "asset-1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 500);
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn superlike_adds_asset_to_configured_album() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    Mock::given(method("PUT"))
        .and(path(format!("/api/albums/{TEST_ALBUM_ID}/assets")))
        .and(header("x-api-key", TEST_API_KEY))
        .and(body_json(serde_json::json!({ "ids": ["asset-1"] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let response = client
        .post(app.api_url("/superlike"))
        .json(&serde_json::json!({ "id": "asset-1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn superlike_failure_uses_upstream_status() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    Mock::given(method("PUT"))
        .and(path(format!("/api/albums/{TEST_ALBUM_ID}/assets")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.mock_server)
        .await;

    let response = client
        .post(app.api_url("/superlike"))
        .json(&serde_json::json!({ "id": "asset-1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 503);
}

#[tokio::test]
async fn superlike_transport_failure_is_bad_gateway() {
    let app = spawn_app_with_unreachable_upstream().await;
    let client = reqwest::Client::new();

    let response = client
        .post(app.api_url("/superlike"))
        .json(&serde_json::json!({ "id": "asset-1" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 502);
}
