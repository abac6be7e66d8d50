/// Core data structures for tracking results
///
/// This module defines the primary data structures passed between the
/// track list parser, the query client, the renderers and the runner.
use crate::error::QueryError;

/// One parcel to look up, as read from the track list
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackingRequest {
    pub track: String,       // "RR123456789BY"
    pub description: String, // "Books from grandma"
    pub extra: String,       // free-form note
}

impl TrackingRequest {
    pub fn new(track: impl Into<String>, description: impl Into<String>, extra: impl Into<String>) -> Self {
        Self { track: track.into(), description: description.into(), extra: extra.into() }
    }
}

/// One status-history table extracted from a service response
///
/// Rows are kept exactly as extracted; their cell count is not checked
/// against the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResultTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }
}

/// Report layout selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned text tables with a header row
    Table,
    /// One line per status row, cells joined with " - "
    Plain,
}

/// Everything the runner learned about a single request
#[derive(Debug)]
pub struct TrackOutcome {
    pub request: TrackingRequest,
    pub tables: Vec<ResultTable>,
    /// Set when the service could not be queried; `tables` is empty then
    pub failure: Option<QueryError>,
}

/// Counters for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct RunSummary {
    pub processed: usize,
    pub with_data: usize,
    pub empty: usize,
    pub failed: usize,
    pub interrupted: bool,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &TrackOutcome) {
        self.processed += 1;
        if outcome.failure.is_some() {
            self.failed += 1;
        } else if outcome.tables.is_empty() {
            self.empty += 1;
        } else {
            self.with_data += 1;
        }
    }
}
