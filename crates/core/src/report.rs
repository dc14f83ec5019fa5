//! Monthly report rendering: fixed text layout and the PDF container.
//!
//! The report is a single page of left-aligned text lines. Layout and PDF
//! assembly are split so the layout can be tested without decoding PDF
//! bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::recap::{format_histogram, MonthlyRecap};

/// Font size for report text, in points.
const FONT_SIZE: i64 = 12;
/// Line spacing, in points.
const LEADING: i64 = 14;
/// Left margin of the text block, in points.
const MARGIN_LEFT: i64 = 40;
/// Baseline of the first line, in points from the page bottom.
const TOP_BASELINE: i64 = 800;
/// A4 page size in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;

/// Produce the fixed report layout, one string per rendered line.
pub fn report_lines(recap: &MonthlyRecap) -> Vec<String> {
    let mut lines = vec![
        format!("Monthly Report {}-{:02}", recap.year, recap.month),
        format!("Total activities: {}", recap.total_activities),
        format!(
            "Activities by category: {}",
            format_histogram(&recap.activities_by_category)
        ),
        format!("Income: {:.2}", recap.total_income),
        format!("Expense: {:.2}", recap.total_expense),
        format!("Net: {:.2}", recap.net),
        String::new(),
        "Summary:".to_string(),
    ];
    lines.extend(recap.summary.lines().map(str::to_string));
    lines
}

/// Render the recap as a one-page PDF document.
pub fn render_pdf(recap: &MonthlyRecap) -> lopdf::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LEADING.into()]),
        Operation::new("Td", vec![MARGIN_LEFT.into(), TOP_BASELINE.into()]),
    ];
    for line in report_lines(recap) {
        operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            PAGE_WIDTH.into(),
            PAGE_HEIGHT.into(),
        ],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recap::build_recap;
    use crate::records::{Activity, Finance};
    use chrono::NaiveDate;

    fn sample_recap() -> MonthlyRecap {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let activities = vec![Activity {
            date,
            name: "Tutoring session".to_string(),
            category: "academics".to_string(),
            duration_hours: 2.0,
            output: None,
            notes: None,
            file_ids: None,
        }];
        let finances = vec![Finance {
            date,
            category: "dues".to_string(),
            income: 100.0,
            expense: 40.0,
            notes: None,
        }];
        build_recap(3, 2024, &activities, &finances)
    }

    #[test]
    fn layout_has_fixed_line_order() {
        let lines = report_lines(&sample_recap());

        assert_eq!(lines[0], "Monthly Report 2024-03");
        assert_eq!(lines[1], "Total activities: 1");
        assert_eq!(lines[2], "Activities by category: academics: 1");
        assert_eq!(lines[3], "Income: 100.00");
        assert_eq!(lines[4], "Expense: 40.00");
        assert_eq!(lines[5], "Net: 60.00");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Summary:");
        assert!(lines[8].starts_with("Monthly Summary for 2024-03:"));
    }

    #[test]
    fn summary_is_expanded_into_individual_lines() {
        let recap = sample_recap();
        let lines = report_lines(&recap);
        // The four-line summary follows the "Summary:" header.
        assert_eq!(lines.len(), 8 + recap.summary.lines().count());
    }

    #[test]
    fn pdf_output_is_a_pdf_document() {
        let bytes = render_pdf(&sample_recap()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn pdf_renders_for_empty_month() {
        let recap = build_recap(1, 2025, &[], &[]);
        let bytes = render_pdf(&recap).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
