//! Handlers for finance records.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use tally_core::error::CoreError;
use tally_core::records::{self, Finance};

use crate::error::{AppError, AppResult};
use crate::handlers::{filter_by_period, PeriodQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /finances?month=&year=
///
/// List finance records sorted by date, optionally filtered to one
/// month/year.
pub async fn list_finances(
    State(state): State<AppState>,
    Query(params): Query<PeriodQuery>,
) -> AppResult<impl IntoResponse> {
    let finances = state.finances.list_by_date().await?;
    let finances = filter_by_period(finances, params.month, params.year);
    Ok(Json(DataResponse { data: finances }))
}

/// POST /finances
///
/// Create a new finance record.
pub async fn create_finance(
    State(state): State<AppState>,
    Json(input): Json<Finance>,
) -> AppResult<impl IntoResponse> {
    records::validate_finance(&input)?;

    let finance = state.finances.create(input).await?;

    tracing::info!(
        id = %finance.id,
        category = %finance.data.category,
        "Finance record created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: finance })))
}

/// GET /finances/{id}
///
/// Get a single finance record by id.
pub async fn get_finance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let finance = state.finances.get(&id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Finance",
            id,
        })
    })?;

    Ok(Json(DataResponse { data: finance }))
}

/// PUT /finances/{id}
///
/// Replace all data fields of a finance record.
pub async fn update_finance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<Finance>,
) -> AppResult<impl IntoResponse> {
    records::validate_finance(&input)?;

    let finance = state.finances.update(&id, input).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Finance",
            id,
        })
    })?;

    tracing::info!(id = %finance.id, "Finance record updated");

    Ok(Json(DataResponse { data: finance }))
}

/// DELETE /finances/{id}
///
/// Hard-delete a finance record.
pub async fn delete_finance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.finances.delete(&id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Finance",
            id,
        }));
    }

    tracing::info!(id = %id, "Finance record deleted");

    Ok(StatusCode::NO_CONTENT)
}
