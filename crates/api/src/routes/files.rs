//! Route definitions for file upload and download.
//!
//! Mounted at `/files` by `api_routes()`.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// File routes.
///
/// ```text
/// POST /          -> upload_file (multipart, field `file`)
/// GET  /{id}      -> download_file
/// ```
///
/// Uploads carry no size cap, so the default body limit is lifted here.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(files::upload_file))
        .route("/{id}", get(files::download_file))
        .layer(DefaultBodyLimit::disable())
}
