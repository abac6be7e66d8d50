/// Console formatting helpers - Pure text layout concerns
///
/// This module handles the width arithmetic shared by the renderers:
/// - Display width of Unicode text
/// - Left-justified padding to a column width
/// - Aligned, borderless text tables
///
/// It knows nothing about tracking data; the report module feeds it rows.
use unicode_width::UnicodeWidthStr;

/// Spaces on each side of a cell
pub const CELL_PADDING: usize = 1;

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad string with spaces on the right up to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let display_w = display_width(s);
    if display_w >= width { s.to_string() } else { format!("{}{}", s, " ".repeat(width - display_w)) }
}

/// Width of each column, sized to the widest cell in it
pub fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.iter().map(|r| r.len()).chain(std::iter::once(header.len())).max().unwrap_or(0);
    let mut widths = vec![0; columns];

    for line in std::iter::once(header).chain(rows.iter().map(|r| r.as_slice())) {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    widths
}

/// Format one table line: every cell padded to its column, trailing spaces trimmed
pub fn format_aligned_line(cells: &[String], widths: &[usize]) -> String {
    let pad = " ".repeat(CELL_PADDING);
    let mut line = String::new();

    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(|c| c.as_str()).unwrap_or("");
        line.push_str(&pad);
        line.push_str(&pad_to_width(cell, *width));
        line.push_str(&pad);
    }

    line.trim_end().to_string()
}

/// Dashed rule under the header, one run of dashes per column
pub fn format_rule_line(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format_aligned_line(&dashes, widths)
}

/// Render a header plus rows as an aligned text table, one line per row
pub fn format_aligned_table(header: &[String], rows: &[Vec<String>]) -> Vec<String> {
    let widths = column_widths(header, rows);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_aligned_line(header, &widths));
    lines.push(format_rule_line(&widths));
    for row in rows {
        lines.push(format_aligned_line(row, &widths));
    }
    lines
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
