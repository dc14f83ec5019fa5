//! Record payload types, category constants, and validation functions.
//!
//! These are the shapes clients submit. The persisted form (generated id
//! plus created/updated timestamps) is assembled by the `tally-db`
//! repository layer on top of these payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of an activity name in characters.
pub const MAX_ACTIVITY_NAME_LENGTH: usize = 200;

/// Maximum length of a finance category in characters.
pub const MAX_FINANCE_CATEGORY_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Activity categories
// ---------------------------------------------------------------------------

/// Activity category labels. Matching is exact and case-sensitive.
pub const CATEGORY_ADMINISTRATION: &str = "administration";
pub const CATEGORY_ACADEMICS: &str = "academics";
pub const CATEGORY_FINANCE: &str = "finance";
pub const CATEGORY_SOCIAL: &str = "social";
pub const CATEGORY_COMMUNITY_SERVICE: &str = "community service";
pub const CATEGORY_DOCUMENTATION: &str = "documentation";

/// All valid activity categories.
pub const VALID_ACTIVITY_CATEGORIES: &[&str] = &[
    CATEGORY_ADMINISTRATION,
    CATEGORY_ACADEMICS,
    CATEGORY_FINANCE,
    CATEGORY_SOCIAL,
    CATEGORY_COMMUNITY_SERVICE,
    CATEGORY_DOCUMENTATION,
];

// ---------------------------------------------------------------------------
// Payload types
// ---------------------------------------------------------------------------

/// An activity entry: something that happened on a calendar date.
///
/// `file_ids` holds weak references to File records. Referential integrity
/// is not enforced and deleting a File leaves these ids dangling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub date: NaiveDate,
    pub name: String,
    pub category: String,
    pub duration_hours: f64,
    pub output: Option<String>,
    pub notes: Option<String>,
    pub file_ids: Option<Vec<String>>,
}

/// A finance entry: income and/or expense on a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finance {
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub income: f64,
    #[serde(default)]
    pub expense: f64,
    pub notes: Option<String>,
}

/// Metadata for an uploaded file blob.
///
/// `url` is the storage location (a local filesystem path in this
/// deployment); clients treat it as opaque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    pub filename: String,
    pub content_type: String,
    pub url: String,
    pub size: i64,
}

/// Access to the calendar date of a record payload, for period filtering.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for Activity {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for Finance {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the category is one of the fixed activity categories.
pub fn validate_activity_category(category: &str) -> Result<(), CoreError> {
    if VALID_ACTIVITY_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "category must be one of {VALID_ACTIVITY_CATEGORIES:?}, got '{category}'"
        )))
    }
}

/// Validate that a value is a finite non-negative amount.
///
/// Returns a `CoreError::Validation` naming the field if out of range.
pub fn validate_non_negative(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} must be >= 0, got {value}"
        )));
    }
    Ok(())
}

/// Validate an activity payload before it reaches storage.
pub fn validate_activity(input: &Activity) -> Result<(), CoreError> {
    if input.name.chars().count() > MAX_ACTIVITY_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_ACTIVITY_NAME_LENGTH} characters"
        )));
    }
    validate_activity_category(&input.category)?;
    validate_non_negative(input.duration_hours, "duration_hours")?;
    Ok(())
}

/// Validate a finance payload before it reaches storage.
pub fn validate_finance(input: &Finance) -> Result<(), CoreError> {
    if input.category.chars().count() > MAX_FINANCE_CATEGORY_LENGTH {
        return Err(CoreError::Validation(format!(
            "category must be at most {MAX_FINANCE_CATEGORY_LENGTH} characters"
        )));
    }
    validate_non_negative(input.income, "income")?;
    validate_non_negative(input.expense, "expense")?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(category: &str) -> Activity {
        Activity {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            name: "Weekly board meeting".to_string(),
            category: category.to_string(),
            duration_hours: 1.5,
            output: None,
            notes: None,
            file_ids: None,
        }
    }

    // -- categories --

    #[test]
    fn accepts_all_fixed_categories() {
        for cat in VALID_ACTIVITY_CATEGORIES {
            assert!(validate_activity_category(cat).is_ok());
        }
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(validate_activity_category("hobbies").is_err());
    }

    #[test]
    fn category_matching_is_case_sensitive() {
        assert!(validate_activity_category("Academics").is_err());
    }

    // -- activity validation --

    #[test]
    fn valid_activity_passes() {
        assert!(validate_activity(&activity(CATEGORY_ACADEMICS)).is_ok());
    }

    #[test]
    fn rejects_activity_with_bad_category() {
        assert!(validate_activity(&activity("hobbies")).is_err());
    }

    #[test]
    fn rejects_overlong_name() {
        let mut a = activity(CATEGORY_SOCIAL);
        a.name = "x".repeat(MAX_ACTIVITY_NAME_LENGTH + 1);
        assert!(validate_activity(&a).is_err());
    }

    #[test]
    fn name_at_limit_passes() {
        let mut a = activity(CATEGORY_SOCIAL);
        a.name = "x".repeat(MAX_ACTIVITY_NAME_LENGTH);
        assert!(validate_activity(&a).is_ok());
    }

    #[test]
    fn rejects_negative_duration() {
        let mut a = activity(CATEGORY_FINANCE);
        a.duration_hours = -0.5;
        assert!(validate_activity(&a).is_err());
    }

    #[test]
    fn rejects_nan_duration() {
        let mut a = activity(CATEGORY_FINANCE);
        a.duration_hours = f64::NAN;
        assert!(validate_activity(&a).is_err());
    }

    #[test]
    fn zero_duration_passes() {
        let mut a = activity(CATEGORY_DOCUMENTATION);
        a.duration_hours = 0.0;
        assert!(validate_activity(&a).is_ok());
    }

    // -- finance validation --

    fn finance() -> Finance {
        Finance {
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            category: "membership dues".to_string(),
            income: 100.0,
            expense: 40.0,
            notes: None,
        }
    }

    #[test]
    fn valid_finance_passes() {
        assert!(validate_finance(&finance()).is_ok());
    }

    #[test]
    fn rejects_overlong_finance_category() {
        let mut f = finance();
        f.category = "y".repeat(MAX_FINANCE_CATEGORY_LENGTH + 1);
        assert!(validate_finance(&f).is_err());
    }

    #[test]
    fn rejects_negative_income() {
        let mut f = finance();
        f.income = -1.0;
        assert!(validate_finance(&f).is_err());
    }

    #[test]
    fn rejects_negative_expense() {
        let mut f = finance();
        f.expense = -0.01;
        assert!(validate_finance(&f).is_err());
    }

    #[test]
    fn finance_amounts_default_to_zero() {
        let f: Finance =
            serde_json::from_str(r#"{"date":"2024-03-10","category":"misc"}"#).unwrap();
        assert_eq!(f.income, 0.0);
        assert_eq!(f.expense, 0.0);
    }
}
