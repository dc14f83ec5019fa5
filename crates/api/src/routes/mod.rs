pub mod activities;
pub mod export;
pub mod files;
pub mod finances;
pub mod health;
pub mod recap;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activities                 list (?month, ?year), create
/// /activities/{id}            get, update, delete
///
/// /finances                   list (?month, ?year), create
/// /finances/{id}              get, update, delete
///
/// /files                      upload (multipart)
/// /files/{id}                 download
///
/// /recap                      monthly aggregates (month, year)
///
/// /export/pdf                 recap as PDF attachment (month, year)
/// /export/excel               records as XLSX attachment (month, year)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/activities", activities::router())
        .nest("/finances", finances::router())
        .nest("/files", files::router())
        .nest("/recap", recap::router())
        .nest("/export", export::router())
}
