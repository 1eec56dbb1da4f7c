//! Routes for reading the story.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::Uri;
use axum::response::Html;
use axum::{Router, routing::get};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
#[instrument(skip(state), fields(request_id = %Uuid::new_v4()))]
async fn show_root(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(&state, state.dispatch.chapter_for("/"))
}

/// GET /{*path}
///
/// The path is percent-decoded, so `/Dark%20Forest` selects `Dark Forest`.
/// A path that does not decode to UTF-8 is used as sent.
#[instrument(skip(state, path, uri), fields(request_id = %Uuid::new_v4(), uri = %uri.path()))]
async fn show_chapter(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let path = match path {
        Ok(Path(decoded)) => decoded,
        Err(rejection) => {
            debug!(%rejection, "path not decoded");
            uri.path().to_owned()
        }
    };
    render(&state, state.dispatch.chapter_for(&path))
}

fn render(state: &AppState, chapter_id: &str) -> Result<Html<String>, ApiError> {
    info!(chapter = chapter_id, "rendering chapter");

    let chapter = state.story.chapter(chapter_id)?;
    let html = state.renderer.render(chapter)?;

    Ok(Html(html))
}

/// Returns the router for the story pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show_root))
        .route("/{*path}", get(show_chapter))
}
