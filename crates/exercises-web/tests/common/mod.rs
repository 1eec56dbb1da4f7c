//! Shared test helpers for story server integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use exercises_story::application::renderer::StoryRenderer;
use exercises_story::domain::story::Story;
use exercises_test_support::SAMPLE_STORY_JSON;
use http_body_util::BodyExt;
use tower::ServiceExt;

use exercises_web::build_router;
use exercises_web::state::{AppState, ChapterDispatch};

/// Build the full app router around `source`. Uses the same router as
/// `main.rs`.
pub fn build_test_app_from(source: &str, dispatch: ChapterDispatch) -> Router {
    let story = Story::from_json_str(source).unwrap();
    let renderer = StoryRenderer::new().unwrap();
    build_router(AppState::new(story, renderer, dispatch))
}

/// Build the full app router around the sample story, rendering `intro`
/// for every path.
pub fn build_test_app() -> Router {
    build_test_app_from(SAMPLE_STORY_JSON, ChapterDispatch::IntroOnly)
}

/// Send a request and return the status and body text.
pub async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body_bytes.to_vec()).unwrap())
}

/// Send a GET request and return the status and body text.
pub async fn get_html(app: Router, uri: &str) -> (StatusCode, String) {
    send(app, "GET", uri).await
}

/// Send a GET request and parse the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get_html(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}
