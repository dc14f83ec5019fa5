//! Two-sheet spreadsheet export for a month's records.

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::records::{Activity, Finance};

/// Column headers of the Activities sheet.
pub const ACTIVITY_COLUMNS: &[&str] =
    &["date", "name", "category", "duration_hours", "output", "notes"];

/// Column headers of the Finance sheet.
pub const FINANCE_COLUMNS: &[&str] = &["date", "category", "income", "expense", "notes"];

fn write_headers(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    Ok(())
}

/// Build an XLSX workbook with an Activities sheet and a Finance sheet,
/// one row per record, and return the serialized bytes.
pub fn build_workbook(
    activities: &[Activity],
    finances: &[Finance],
) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Activities")?;
        write_headers(sheet, ACTIVITY_COLUMNS)?;
        for (index, activity) in activities.iter().enumerate() {
            let row = index as u32 + 1;
            sheet.write_string(row, 0, activity.date.to_string())?;
            sheet.write_string(row, 1, &activity.name)?;
            sheet.write_string(row, 2, &activity.category)?;
            sheet.write_number(row, 3, activity.duration_hours)?;
            sheet.write_string(row, 4, activity.output.as_deref().unwrap_or(""))?;
            sheet.write_string(row, 5, activity.notes.as_deref().unwrap_or(""))?;
        }
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Finance")?;
        write_headers(sheet, FINANCE_COLUMNS)?;
        for (index, finance) in finances.iter().enumerate() {
            let row = index as u32 + 1;
            sheet.write_string(row, 0, finance.date.to_string())?;
            sheet.write_string(row, 1, &finance.category)?;
            sheet.write_number(row, 2, finance.income)?;
            sheet.write_number(row, 3, finance.expense)?;
            sheet.write_string(row, 4, finance.notes.as_deref().unwrap_or(""))?;
        }
    }

    workbook.save_to_buffer()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn workbook_bytes_are_a_zip_container() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let activities = vec![Activity {
            date,
            name: "Library shift".to_string(),
            category: "community service".to_string(),
            duration_hours: 3.0,
            output: Some("shelved returns".to_string()),
            notes: None,
            file_ids: None,
        }];
        let finances = vec![Finance {
            date,
            category: "supplies".to_string(),
            income: 0.0,
            expense: 12.5,
            notes: Some("markers".to_string()),
        }];

        let bytes = build_workbook(&activities, &finances).unwrap();

        // XLSX is a ZIP archive.
        assert!(bytes.starts_with(b"PK\x03\x04"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn empty_workbook_still_renders() {
        let bytes = build_workbook(&[], &[]).unwrap();
        assert!(bytes.starts_with(b"PK\x03\x04"));
    }
}
