//! Report generation module - turning extracted tables into text.
//!
//! This module handles:
//! - Rendering one tracking request and its tables in the selected format
//! - Accumulating rendered blocks into the run's report
//! - Export of structured results to JSON
//!
//! # Module Organization
//!
//! - `table` - Aligned tabular layout with a trailing asterisk separator
//! - `plain` - Flat, line-per-row layout
//! - `export` - JSON export of all outcomes

mod export;
mod plain;
mod table;

use crate::types::{ReportFormat, ResultTable, TrackingRequest};

pub use export::export_json_report;
pub use plain::render_plain;
pub use table::{SEPARATOR_LINE, render_table};

/// One-line summary that opens every request block
pub fn summary_line(request: &TrackingRequest) -> String {
    format!("Track: {}, Desc: {}, Details: {}\n", request.track, request.description, request.extra)
}

impl ReportFormat {
    /// Render one request block in this format
    pub fn render(&self, request: &TrackingRequest, tables: &[ResultTable]) -> String {
        match self {
            ReportFormat::Table => render_table(request, tables),
            ReportFormat::Plain => render_plain(request, tables),
        }
    }
}

/// Full text of a run, built block by block in request order
#[derive(Debug, Clone)]
pub struct Report {
    format: ReportFormat,
    body: String,
}

impl Report {
    pub fn new(format: ReportFormat) -> Self {
        Self { format, body: String::new() }
    }

    /// Render a block, append it and return it so the caller can stream it
    pub fn append(&mut self, request: &TrackingRequest, tables: &[ResultTable]) -> &str {
        let block = self.format.render(request, tables);
        let start = self.body.len();
        self.body.push_str(&block);
        &self.body[start..]
    }

    pub fn format(&self) -> ReportFormat {
        self.format
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }
}
