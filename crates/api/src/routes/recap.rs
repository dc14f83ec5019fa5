//! Route definitions for the monthly recap.
//!
//! Mounted at `/recap` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::recap;
use crate::state::AppState;

/// Recap routes.
///
/// ```text
/// GET /           -> monthly_recap (month, year)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(recap::monthly_recap))
}
