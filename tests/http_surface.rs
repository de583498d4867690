use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::io::Cursor;
use tower::ServiceExt;

use vto::server::{router, AppState};
use vto::{Config, GeminiClient, GeminiConfig};

fn test_state() -> AppState {
    let config = Config::new().with_gemini(GeminiConfig::new().with_api_key("test-key"));
    let gemini = GeminiClient::new(config.gemini.clone()).unwrap();
    AppState { config, gemini }
}

fn small_png_base64() -> String {
    let image = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    STANDARD.encode(buffer.get_ref())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn root_reports_service_metadata() {
    let app = router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "VTO API is running");
    assert_eq!(body["endpoints"]["with_avatar"], "/vto/with-avatar");
    assert_eq!(body["endpoints"]["with_selfie"], "/vto/with-selfie");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn health_reflects_configured_credential() {
    let app = router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["gemini_configured"], true);
}

#[tokio::test]
async fn with_selfie_rejects_out_of_range_height() {
    let app = router(test_state());
    let response = app
        .oneshot(post_json(
            "/vto/with-selfie",
            serde_json::json!({
                "selfie_base64": small_png_base64(),
                "vetement_base64": small_png_base64(),
                "sexe": "femme",
                "taille_cm": 50,
                "poids_kg": 70,
                "taille_haut": "M",
                "taille_bas": "S"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("taille_cm"));
}

#[tokio::test]
async fn with_selfie_rejects_unknown_sexe_label() {
    let app = router(test_state());
    let response = app
        .oneshot(post_json(
            "/vto/with-selfie",
            serde_json::json!({
                "selfie_base64": small_png_base64(),
                "vetement_base64": small_png_base64(),
                "sexe": "autre",
                "taille_cm": 180,
                "poids_kg": 75,
                "taille_haut": "L",
                "taille_bas": "M"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn with_avatar_rejects_undecodable_image() {
    let app = router(test_state());
    let response = app
        .oneshot(post_json(
            "/vto/with-avatar",
            serde_json::json!({
                "avatar_base64": "this is not base64!!!",
                "vetement_base64": small_png_base64()
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid image:"));
}

#[tokio::test]
async fn with_avatar_rejects_missing_field() {
    let app = router(test_state());
    let response = app
        .oneshot(post_json(
            "/vto/with-avatar",
            serde_json::json!({ "avatar_base64": small_png_base64() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn failed_generation_returns_500_and_cleans_temp_files() {
    // "test-key" is not a real credential: the synthesis call fails, either at
    // transport level or with a non-2xx status. Both surface as the same
    // generation failure.
    let app = router(test_state());
    let response = app
        .oneshot(post_json(
            "/vto/with-avatar",
            serde_json::json!({
                "avatar_base64": small_png_base64(),
                "vetement_base64": format!("data:image/png;base64,{}", small_png_base64())
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap().starts_with("Generation failed:"));

    // the request-scoped temp images are gone
    let leftovers: Vec<_> = std::fs::read_dir(std::env::temp_dir())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.starts_with("model_") || name.starts_with("clothing_")
        })
        .collect();
    assert!(leftovers.is_empty());
}
