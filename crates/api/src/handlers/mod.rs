//! HTTP handlers, one module per resource.

pub mod activities;
pub mod export;
pub mod files;
pub mod finances;
pub mod recap;

use serde::Deserialize;
use tally_core::recap::matches_period;
use tally_core::records::Dated;
use tally_db::Record;

/// Optional month/year query filter shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Apply the month/year filter in process, after the capped list load.
///
/// A collection holding more documents than the list cap can therefore
/// omit matching records. Known scaling limitation, kept by design; fixing
/// it means a database-level date filter plus an index on `date`.
pub fn filter_by_period<P: Dated>(
    records: Vec<Record<P>>,
    month: Option<u32>,
    year: Option<i32>,
) -> Vec<Record<P>> {
    records
        .into_iter()
        .filter(|record| matches_period(record.data.date(), month, year))
        .collect()
}
