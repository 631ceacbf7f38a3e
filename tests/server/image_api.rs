use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{TEST_API_KEY, spawn_app, spawn_app_with_unreachable_upstream};

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

#[tokio::test]
async fn image_relays_thumbnail_with_jpeg_headers() {
    let app = spawn_app().await;

    Mock::given(method("GET"))
        .and(path("/api/assets/asset-1/thumbnail"))
        .and(query_param("size", "preview"))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(JPEG_MAGIC.to_vec(), "application/octet-stream"),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;

    let response = reqwest::get(format!("{}?id=asset-1", app.api_url("/image")))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/jpeg")
    );
    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("inline"));
    assert!(disposition.contains("asset-1.jpg"));

    let body = response.bytes().await.expect("Failed to read body");
    assert_eq!(body.as_ref(), JPEG_MAGIC);
}

#[tokio::test]
async fn image_without_id_is_bad_request_and_makes_no_upstream_call() {
    let app = spawn_app().await;

    let response = reqwest::get(app.api_url("/image"))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn image_empty_id_is_bad_request() {
    let app = spawn_app().await;

    let response = reqwest::get(format!("{}?id=", app.api_url("/image")))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    assert!(app.upstream_requests().await.is_empty());
}

#[tokio::test]
async fn image_upstream_errors_collapse_to_not_found() {
    let app = spawn_app().await;

    // Status and reason vary; the public outcome never does
    for status in [401u16, 404, 500, 503] {
        Mock::given(method("GET"))
            .and(path(format!("/api/assets/asset-{status}/thumbnail")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&app.mock_server)
            .await;

        let response = reqwest::get(format!("{}?id=asset-{status}", app.api_url("/image")))
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), 404, "upstream {status} should map to 404");
    }
}

#[tokio::test]
async fn image_transport_failure_is_not_found() {
    let app = spawn_app_with_unreachable_upstream().await;

    let response = reqwest::get(format!("{}?id=asset-1", app.api_url("/image")))
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 404);
}
