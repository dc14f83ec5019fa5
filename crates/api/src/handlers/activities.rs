//! Handlers for activity records.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tally_core::error::CoreError;
use tally_core::records::{self, Activity};

use crate::error::{AppError, AppResult};
use crate::handlers::{filter_by_period, PeriodQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /activities?month=&year=
///
/// List activities sorted by date, optionally filtered to one month/year.
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<PeriodQuery>,
) -> AppResult<impl IntoResponse> {
    let activities = state.activities.list_by_date().await?;
    let activities = filter_by_period(activities, params.month, params.year);
    Ok(Json(DataResponse { data: activities }))
}

/// POST /activities
///
/// Create a new activity record.
pub async fn create_activity(
    State(state): State<AppState>,
    Json(input): Json<Activity>,
) -> AppResult<impl IntoResponse> {
    records::validate_activity(&input)?;

    let activity = state.activities.create(input).await?;

    tracing::info!(
        id = %activity.id,
        category = %activity.data.category,
        "Activity created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: activity })))
}

/// GET /activities/{id}
///
/// Get a single activity record by id.
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let activity = state.activities.get(&id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        })
    })?;

    Ok(Json(DataResponse { data: activity }))
}

/// PUT /activities/{id}
///
/// Replace all data fields of an activity record.
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Activity>,
) -> AppResult<impl IntoResponse> {
    records::validate_activity(&input)?;

    let activity = state.activities.update(&id, input).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        })
    })?;

    tracing::info!(id = %activity.id, "Activity updated");

    Ok(Json(DataResponse { data: activity }))
}

/// DELETE /activities/{id}
///
/// Hard-delete an activity record. Referencing entities are unaffected.
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.activities.delete(&id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Activity",
            id,
        }));
    }

    tracing::info!(id = %id, "Activity deleted");

    Ok(StatusCode::NO_CONTENT)
}
