//! Result table extraction from tracking service HTML.
//!
//! The service renders each status history as `<table class="tbl">`. The
//! first row holds the column titles in `td.theader` cells and every later
//! row is one status entry. All knowledge of that markup lives in this
//! module; the rest of the crate only sees [`ResultTable`].
//!
//! Extraction never fails. Markup that doesn't look like a result table is
//! ignored, so a changed page layout shows up as "no data" rather than an
//! error.

use crate::types::ResultTable;
use lazy_static::lazy_static;
use log::debug;
use scraper::{ElementRef, Html, Selector};

/// CSS class marking a result table
pub const TABLE_CLASS: &str = "tbl";

/// CSS class marking a header cell in the first row
pub const HEADER_CLASS: &str = "theader";

lazy_static! {
    static ref TABLE_SELECTOR: Selector =
        Selector::parse(&format!("table.{}", TABLE_CLASS)).expect("result table selector is valid");
    static ref ROW_SELECTOR: Selector = Selector::parse("tr").expect("row selector is valid");
    static ref CELL_SELECTOR: Selector = Selector::parse("td").expect("cell selector is valid");
    static ref HEADER_CELL_SELECTOR: Selector =
        Selector::parse(&format!("td.{}", HEADER_CLASS)).expect("header cell selector is valid");
}

/// Extract every result table that has at least one data row
pub fn extract_tables(html: &str) -> Vec<ResultTable> {
    let document = Html::parse_document(html);
    let mut tables = Vec::new();

    for (idx, table) in document.select(&TABLE_SELECTOR).enumerate() {
        match extract_table(table) {
            Some(t) => tables.push(t),
            None => debug!("result table #{} has no data rows, dropping it", idx),
        }
    }

    debug!("extracted {} result tables", tables.len());
    tables
}

fn extract_table(table: ElementRef<'_>) -> Option<ResultTable> {
    let mut rows = table.select(&ROW_SELECTOR);

    let header = rows.next()?.select(&HEADER_CELL_SELECTOR).map(cell_text).collect();
    let data: Vec<Vec<String>> = rows.map(|row| row.select(&CELL_SELECTOR).map(cell_text).collect()).collect();

    if data.is_empty() {
        return None;
    }

    Some(ResultTable { header, rows: data })
}

/// Text content of a cell with tags dropped and entities decoded
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}
