//! Integration tests for upload staging and the presets catalog.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

/// Build a minimal multipart request body with one part.
fn multipart_body(part_name: &str, filename: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = "printseed-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{part_name}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

async fn post_multipart(
    app: axum::Router,
    uri: &str,
    part_name: &str,
    bytes: &[u8],
) -> axum::http::Response<Body> {
    let (content_type, body) = multipart_body(part_name, "source.pdf", bytes);
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Uploads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn staging_a_pdf_returns_201_with_upload_id() {
    let app = common::build_test_app().await;
    let response = post_multipart(app, "/api/v1/uploads", "file", b"%PDF-1.4 test").await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let upload_id = json["data"]["upload_id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(upload_id).is_ok());
}

#[tokio::test]
async fn staged_upload_is_usable_for_session_creation() {
    let app = common::build_test_app().await;
    let staged = body_json(
        post_multipart(
            app.clone(),
            "/api/v1/uploads",
            "file",
            b"%PDF-1.4 staged source",
        )
        .await,
    )
    .await;
    let upload_id = staged["data"]["upload_id"].as_str().unwrap();

    let mut body = common::session_body("http://127.0.0.1:9/print", 2);
    body["industries"]["healthcare"]["pdf_source"] = serde_json::json!("upload");
    body["industries"]["healthcare"]["upload_id"] = serde_json::json!(upload_id);

    let response = common::post_json(app, "/api/v1/sessions", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn missing_file_part_is_400() {
    let app = common::build_test_app().await;
    let response = post_multipart(app, "/api/v1/uploads", "attachment", b"%PDF-1.4").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_file_is_400() {
    let app = common::build_test_app().await;
    let response = post_multipart(app, "/api/v1/uploads", "file", b"").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

#[tokio::test]
async fn presets_list_covers_every_industry() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/v1/presets").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = json["data"].as_object().unwrap();

    for industry in ["healthcare", "manufacturing", "legal", "finance", "education"] {
        let names = data[industry].as_array().unwrap();
        assert!(!names.is_empty(), "{industry} preset list is empty");
    }
}
