//! Route definitions for finance records.
//!
//! Mounted at `/finances` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::finances;
use crate::state::AppState;

/// Finance routes.
///
/// ```text
/// GET    /          -> list_finances (?month, ?year)
/// POST   /          -> create_finance
/// GET    /{id}      -> get_finance
/// PUT    /{id}      -> update_finance
/// DELETE /{id}      -> delete_finance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(finances::list_finances).post(finances::create_finance),
        )
        .route(
            "/{id}",
            get(finances::get_finance)
                .put(finances::update_finance)
                .delete(finances::delete_finance),
        )
}
