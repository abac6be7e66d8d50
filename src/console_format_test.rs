/// Tests for console formatting module
///
/// These tests pin the exact layout of aligned tables so report output
/// stays stable.

#[cfg(test)]
mod tests {
    use crate::console_format::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_display_width_unicode() {
        assert_eq!(display_width("Минск"), 5);
        assert_eq!(display_width("📦"), 2);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("hi", 5), "hi   ");
        assert_eq!(pad_to_width("hello", 5), "hello");
        assert_eq!(pad_to_width("hello world", 5), "hello world");
        assert_eq!(pad_to_width("📦", 4), "📦  ");
    }

    #[test]
    fn test_column_widths_cover_header_and_rows() {
        let widths = column_widths(&strings(&["Date", "Status"]), &[strings(&["2020-01-01", "Arrived"])]);
        assert_eq!(widths, vec![10, 7]);
    }

    #[test]
    fn test_column_widths_ragged_rows() {
        let widths = column_widths(&strings(&["A"]), &[strings(&["x", "longer"]), strings(&[])]);
        assert_eq!(widths, vec![1, 6]);
    }

    #[test]
    fn test_format_aligned_line() {
        let line = format_aligned_line(&strings(&["Date", "Status"]), &[10, 7]);
        assert_eq!(line, " Date        Status");
    }

    #[test]
    fn test_format_aligned_line_missing_cells() {
        let line = format_aligned_line(&strings(&["x"]), &[3, 4]);
        assert_eq!(line, " x");
    }

    #[test]
    fn test_format_aligned_table() {
        let lines = format_aligned_table(&strings(&["Date", "Status"]), &[strings(&["2020-01-01", "Arrived"])]);
        assert_eq!(lines, vec![" Date        Status", " ----------  -------", " 2020-01-01  Arrived"]);
    }

    #[test]
    fn test_format_aligned_table_wide_chars_align() {
        let lines = format_aligned_table(&strings(&["Событие", "N"]), &[strings(&["📦", "1"])]);
        assert_eq!(lines[0], " Событие  N");
        assert_eq!(lines[2], " 📦       1");
    }
}
