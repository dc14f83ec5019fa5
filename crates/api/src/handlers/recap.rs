//! Monthly recap endpoint: load, filter, aggregate.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tally_core::recap::{build_recap, validate_month};
use tally_core::records::{Activity, Finance};

use crate::error::AppResult;
use crate::handlers::filter_by_period;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for recap and export endpoints.
#[derive(Debug, Deserialize)]
pub struct RecapQuery {
    pub month: u32,
    pub year: i32,
}

/// Load both collections and reduce them to the payloads dated inside the
/// requested month. Both loads are full (capped) scans filtered in
/// process; see `filter_by_period`.
pub(crate) async fn load_period(
    state: &AppState,
    month: u32,
    year: i32,
) -> AppResult<(Vec<Activity>, Vec<Finance>)> {
    validate_month(month)?;

    let activities = state.activities.list_by_date().await?;
    let activities = filter_by_period(activities, Some(month), Some(year));

    let finances = state.finances.list_by_date().await?;
    let finances = filter_by_period(finances, Some(month), Some(year));

    Ok((
        activities.into_iter().map(|record| record.data).collect(),
        finances.into_iter().map(|record| record.data).collect(),
    ))
}

/// GET /recap?month=&year=
///
/// Aggregate one month: activity count, category histogram, income and
/// expense sums, net, and the generated summary. A month with no records
/// yields all-zero aggregates and an empty histogram.
pub async fn monthly_recap(
    State(state): State<AppState>,
    Query(params): Query<RecapQuery>,
) -> AppResult<impl IntoResponse> {
    let (activities, finances) = load_period(&state, params.month, params.year).await?;
    let recap = build_recap(params.month, params.year, &activities, &finances);
    Ok(Json(DataResponse { data: recap }))
}
