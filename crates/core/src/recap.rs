//! Monthly recap aggregation and summary generation.
//!
//! A recap is computed entirely in process from already-loaded activity and
//! finance payloads; there is no persisted aggregate entity.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::CoreError;
use crate::records::{Activity, Finance};

/// Placeholder top category when a period has no activities.
pub const NO_TOP_CATEGORY: &str = "-";

/// Aggregates for one calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyRecap {
    pub month: u32,
    pub year: i32,
    pub total_activities: u64,
    pub activities_by_category: HashMap<String, u64>,
    pub total_income: f64,
    pub total_expense: f64,
    pub net: f64,
    pub summary: String,
}

/// Validate that a month number is in `1..=12`.
pub fn validate_month(month: u32) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

/// Whether a record date falls inside an optional month/year filter.
///
/// A record matches if the year filter is absent or equal to the date's
/// year, and the month filter is absent or equal to the date's month.
pub fn matches_period(date: NaiveDate, month: Option<u32>, year: Option<i32>) -> bool {
    year.is_none_or(|y| date.year() == y) && month.is_none_or(|m| date.month() == m)
}

/// Count activities per category. Accumulation is unordered; when two
/// categories tie for the top spot the winner is implementation-defined.
pub fn activities_by_category(activities: &[Activity]) -> HashMap<String, u64> {
    let mut by_category: HashMap<String, u64> = HashMap::new();
    for activity in activities {
        *by_category.entry(activity.category.clone()).or_insert(0) += 1;
    }
    by_category
}

/// Render the histogram as `category: count` pairs, alphabetical by
/// category for stable output.
pub fn format_histogram(by_category: &HashMap<String, u64>) -> String {
    let mut entries: Vec<_> = by_category.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .iter()
        .map(|(category, count)| format!("{category}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generate the fixed multi-line textual summary for a month.
pub fn generate_summary(
    month: u32,
    year: i32,
    activities: &[Activity],
    finances: &[Finance],
) -> String {
    let by_category = activities_by_category(activities);
    let top_category = by_category
        .iter()
        .max_by_key(|(_, count)| **count)
        .map(|(category, _)| category.as_str())
        .unwrap_or(NO_TOP_CATEGORY);
    let income: f64 = finances.iter().map(|f| f.income).sum();
    let expense: f64 = finances.iter().map(|f| f.expense).sum();

    format!(
        "Monthly Summary for {year}-{month:02}:\n\
         Total activities: {total}. Top category: {top_category}.\n\
         Activities by category: {histogram}.\n\
         Finance - Income: {income:.2}, Expense: {expense:.2}, Net: {net:.2}.",
        total = activities.len(),
        histogram = format_histogram(&by_category),
        net = income - expense,
    )
}

/// Compute the full recap for a month from already-filtered records.
pub fn build_recap(
    month: u32,
    year: i32,
    activities: &[Activity],
    finances: &[Finance],
) -> MonthlyRecap {
    let activities_by_category = activities_by_category(activities);
    let total_income: f64 = finances.iter().map(|f| f.income).sum();
    let total_expense: f64 = finances.iter().map(|f| f.expense).sum();
    let summary = generate_summary(month, year, activities, finances);

    MonthlyRecap {
        month,
        year,
        total_activities: activities.len() as u64,
        activities_by_category,
        total_income,
        total_expense,
        net: total_income - total_expense,
        summary,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
