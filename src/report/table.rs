//! Tabular report layout.
//!
//! Each result table is printed as an aligned text table under the request
//! summary, and the block is closed with a line of asterisks so requests are
//! easy to tell apart in a long report.

use super::summary_line;
use crate::console_format::format_aligned_table;
use crate::types::{ResultTable, TrackingRequest};

/// Closing line of every tabular block
pub const SEPARATOR_LINE: &str = "*********************************************************";

/// Render a request block as aligned tables.
///
/// Tables without rows are skipped. Every rendered table is followed by a
/// blank line, then the block ends with `SEPARATOR_LINE` and a blank line.
/// When no table is rendered a single blank line still precedes the separator.
pub fn render_table(request: &TrackingRequest, tables: &[ResultTable]) -> String {
    let mut out = summary_line(request);

    let mut rendered = 0;
    for table in tables.iter().filter(|t| t.has_rows()) {
        for line in format_aligned_table(&table.header, &table.rows) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        rendered += 1;
    }
    if rendered == 0 {
        out.push('\n');
    }

    out.push_str(SEPARATOR_LINE);
    out.push_str("\n\n");
    out
}
