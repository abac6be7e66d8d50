//! Flat report layout: one line per status row, no headers.

use super::summary_line;
use crate::types::{ResultTable, TrackingRequest};

/// Joins the cells of a row
pub const CELL_SEPARATOR: &str = " - ";

/// Render a request block as flat lines, each table followed by a blank line
pub fn render_plain(request: &TrackingRequest, tables: &[ResultTable]) -> String {
    let mut out = summary_line(request);

    for table in tables.iter().filter(|t| t.has_rows()) {
        for row in &table.rows {
            out.push_str(&row.join(CELL_SEPARATOR));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> ResultTable {
        ResultTable {
            header: vec!["H1".to_string(), "H2".to_string()],
            rows: rows.iter().map(|r| r.iter().map(|s| s.to_string()).collect()).collect(),
        }
    }

    #[test]
    fn test_rows_without_header() {
        let req = TrackingRequest::new("12345", "Parcel", "note");
        let out = render_plain(&req, &[table(&[&["a", "b"], &["c", "d"]])]);
        assert_eq!(out, "Track: 12345, Desc: Parcel, Details: note\na - b\nc - d\n\n");
        assert!(!out.contains("H1"));
        assert!(!out.contains('*'));
    }

    #[test]
    fn test_blank_line_between_tables() {
        let req = TrackingRequest::new("1", "d", "e");
        let out = render_plain(&req, &[table(&[&["a", "b"]]), table(&[&["c"]])]);
        assert_eq!(out, "Track: 1, Desc: d, Details: e\na - b\n\nc\n\n");
    }

    #[test]
    fn test_no_tables_and_zero_row_tables() {
        let req = TrackingRequest::new("1", "d", "e");
        assert_eq!(render_plain(&req, &[]), "Track: 1, Desc: d, Details: e\n");
        assert_eq!(render_plain(&req, &[table(&[])]), "Track: 1, Desc: d, Details: e\n");
    }
}
