//! Route definitions for recap exports.
//!
//! Mounted at `/export` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Export routes.
///
/// ```text
/// GET /pdf        -> export_pdf (month, year)
/// GET /excel      -> export_excel (month, year)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pdf", get(export::export_pdf))
        .route("/excel", get(export::export_excel))
}
