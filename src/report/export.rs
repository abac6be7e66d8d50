//! Report export to JSON.
//!
//! The text report is meant for people; this export keeps the extracted
//! tables in structured form for scripts that post-process a run.

use crate::types::{ReportFormat, RunSummary, TrackOutcome};
use serde_json::{Value, json};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Build the JSON document for a run
pub fn json_report(outcomes: &[TrackOutcome], summary: &RunSummary, format: ReportFormat) -> Value {
    let results: Vec<Value> = outcomes
        .iter()
        .map(|o| {
            json!({
                "track": o.request.track,
                "description": o.request.description,
                "extra": o.request.extra,
                "tables": o.tables,
                "error": o.failure.as_ref().map(|e| e.to_string()),
            })
        })
        .collect();

    json!({
        "format": format,
        "generated_at": chrono::Local::now().to_rfc3339(),
        "summary": summary,
        "results": results,
    })
}

/// Export all outcomes of a run as pretty-printed JSON.
///
/// # Arguments
/// * `outcomes` - Every processed request, in input order
/// * `summary` - Counters for the run
/// * `format` - Text format the report was rendered in
/// * `output_path` - Path to write the JSON file
pub fn export_json_report(
    outcomes: &[TrackOutcome],
    summary: &RunSummary,
    format: ReportFormat,
    output_path: &Path,
) -> std::io::Result<()> {
    let report = json_report(outcomes, summary, format);
    let file = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(file, &report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;
    use crate::types::{ResultTable, TrackingRequest};

    fn outcomes() -> Vec<TrackOutcome> {
        vec![
            TrackOutcome {
                request: TrackingRequest::new("A1", "one", "x"),
                tables: vec![ResultTable {
                    header: vec!["Date".to_string(), "Status".to_string()],
                    rows: vec![vec!["2020-01-01".to_string(), "Arrived".to_string()]],
                }],
                failure: None,
            },
            TrackOutcome {
                request: TrackingRequest::new("B2", "two", "y"),
                tables: vec![],
                failure: Some(QueryError::Status { code: 500, url: "http://localhost/".to_string() }),
            },
        ]
    }

    #[test]
    fn test_json_report_structure() {
        let outcomes = outcomes();
        let summary = RunSummary { processed: 2, with_data: 1, empty: 0, failed: 1, interrupted: false };
        let value = json_report(&outcomes, &summary, ReportFormat::Plain);

        assert_eq!(value["format"], "plain");
        assert_eq!(value["summary"]["failed"], 1);
        assert_eq!(value["results"][0]["track"], "A1");
        assert_eq!(value["results"][0]["tables"][0]["header"][1], "Status");
        assert_eq!(value["results"][0]["tables"][0]["rows"][0][0], "2020-01-01");
        assert!(value["results"][0]["error"].is_null());
        assert_eq!(value["results"][1]["track"], "B2");
        assert!(value["results"][1]["error"].as_str().unwrap().contains("HTTP 500"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        export_json_report(&outcomes(), &RunSummary::default(), ReportFormat::Table, &path).unwrap();

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["format"], "table");
        assert_eq!(parsed["results"].as_array().unwrap().len(), 2);
    }
}
