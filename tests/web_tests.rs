//! Integration tests for the city guide web routes

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use cityguide::api::{AppState, Pages};
use cityguide::models::CompletionRequest;
use cityguide::{CityGuide, CityGuideError, CompletionClient, web};

/// Answers every request with the same text
struct CannedClient(&'static str);

#[async_trait]
impl CompletionClient for CannedClient {
    async fn complete(&self, request: &CompletionRequest) -> cityguide::Result<String> {
        assert_eq!(request.messages.len(), 2);
        Ok(self.0.to_string())
    }
}

struct DownClient;

#[async_trait]
impl CompletionClient for DownClient {
    async fn complete(&self, _request: &CompletionRequest) -> cityguide::Result<String> {
        Err(CityGuideError::api("Completion API error 503: unavailable"))
    }
}

fn app_with(client: impl CompletionClient + 'static) -> axum::Router {
    let guide = CityGuide::new(Arc::new(client), "gpt-4o-mini");
    let state = AppState::new(guide, Pages::new().unwrap());
    web::app(state, "static")
}

fn post_form(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_get_renders_form() {
    let app = app_with(CannedClient(""));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"name="city""#));
}

#[tokio::test]
async fn test_post_renders_both_lists() {
    let app = app_with(CannedClient(
        "Sure!\nLandmarks:\n- Eiffel Tower\n- Louvre\nActivities:\n- Walk the Seine\n",
    ));
    let response = app.oneshot(post_form("city=Paris")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("<h1>Paris</h1>"));
    assert!(html.contains("<li>Eiffel Tower</li>"));
    assert!(html.contains("<li>Louvre</li>"));
    assert!(html.contains("<li>Walk the Seine</li>"));
    assert!(!html.contains("Sure!"));
}

#[tokio::test]
async fn test_post_decodes_form_encoding() {
    let app = app_with(CannedClient("Landmarks:\n- Old Town"));
    let response = app.oneshot(post_form("city=San+Sebasti%C3%A1n")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<h1>San Sebastián</h1>"));
}

#[tokio::test]
async fn test_post_with_empty_city_is_accepted() {
    let app = app_with(CannedClient("nothing useful"));
    let response = app.oneshot(post_form("city=")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_post_without_city_field_is_rejected() {
    let app = app_with(CannedClient(""));
    let response = app.oneshot(post_form("town=Paris")).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_completion_failure_is_internal_server_error() {
    let app = app_with(DownClient);
    let response = app.oneshot(post_form("city=Paris")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let html = body_text(response).await;
    assert!(!html.contains("503"));
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let app = app_with(CannedClient(""));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/static/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
