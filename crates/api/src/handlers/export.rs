//! Recap export endpoints: PDF report and two-sheet spreadsheet.

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use tally_core::recap::build_recap;
use tally_core::{report, workbook};

use crate::error::{AppError, AppResult};
use crate::handlers::recap::{load_period, RecapQuery};
use crate::state::AppState;

/// Content type of an XLSX workbook.
const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Attachment filename for a monthly export.
fn export_filename(year: i32, month: u32, extension: &str) -> String {
    format!("report_{year}_{month:02}.{extension}")
}

/// Wrap rendered bytes as a downloadable attachment.
fn attachment(bytes: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// GET /export/pdf?month=&year=
///
/// Render the monthly recap as a one-page PDF report.
pub async fn export_pdf(
    State(state): State<AppState>,
    Query(params): Query<RecapQuery>,
) -> AppResult<Response> {
    let (activities, finances) = load_period(&state, params.month, params.year).await?;
    let recap = build_recap(params.month, params.year, &activities, &finances);

    let bytes = report::render_pdf(&recap)
        .map_err(|e| AppError::InternalError(format!("PDF rendering failed: {e}")))?;

    Ok(attachment(
        bytes,
        "application/pdf",
        &export_filename(params.year, params.month, "pdf"),
    ))
}

/// GET /export/excel?month=&year=
///
/// Render the month's records as a two-sheet workbook (Activities,
/// Finance), one row per filtered record.
pub async fn export_excel(
    State(state): State<AppState>,
    Query(params): Query<RecapQuery>,
) -> AppResult<Response> {
    let (activities, finances) = load_period(&state, params.month, params.year).await?;

    let bytes = workbook::build_workbook(&activities, &finances)
        .map_err(|e| AppError::InternalError(format!("Workbook rendering failed: {e}")))?;

    Ok(attachment(
        bytes,
        XLSX_CONTENT_TYPE,
        &export_filename(params.year, params.month, "xlsx"),
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_zero_pads_month() {
        assert_eq!(export_filename(2024, 3, "pdf"), "report_2024_03.pdf");
        assert_eq!(export_filename(2024, 12, "xlsx"), "report_2024_12.xlsx");
    }

    #[test]
    fn attachment_sets_disposition_and_content_type() {
        let response = attachment(vec![1, 2, 3], "application/pdf", "report_2024_03.pdf");
        let headers = response.headers();
        assert_eq!(headers[header::CONTENT_TYPE.as_str()], "application/pdf");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION.as_str()],
            "attachment; filename=report_2024_03.pdf"
        );
    }
}
