//! Route definitions for activity records.
//!
//! Mounted at `/activities` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::activities;
use crate::state::AppState;

/// Activity routes.
///
/// ```text
/// GET    /          -> list_activities (?month, ?year)
/// POST   /          -> create_activity
/// GET    /{id}      -> get_activity
/// PUT    /{id}      -> update_activity
/// DELETE /{id}      -> delete_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(activities::list_activities).post(activities::create_activity),
        )
        .route(
            "/{id}",
            get(activities::get_activity)
                .put(activities::update_activity)
                .delete(activities::delete_activity),
        )
}
