use crate::error::QueryError;
use crate::query::{PageSource, QueryClient};
use crate::types::*;
use crate::ui;
use log::{debug, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// Everything a run produced, in request order
#[derive(Debug, Default)]
pub struct RunOutput {
    pub outcomes: Vec<TrackOutcome>,
    pub summary: RunSummary,
}

/// Query every request in order
///
/// This is the main entry point for a run. Requests are processed one at a
/// time and `on_outcome` is invoked as soon as each one completes, so the
/// caller can stream the rendered block. An error from the callback aborts
/// the run.
///
/// `stop` is checked before each request; once set, the run ends early with
/// `summary.interrupted` and no further requests are started. A request whose
/// retry loop was cut short by the same flag is not reported.
pub fn run_tracks<S, F>(
    requests: &[TrackingRequest],
    client: &QueryClient<S>,
    stop: &AtomicBool,
    mut on_outcome: F,
) -> Result<RunOutput, String>
where
    S: PageSource,
    F: FnMut(&TrackOutcome) -> Result<(), String>,
{
    debug!("Starting run for {} tracking requests (retry budget {})", requests.len(), client.retry());

    let mut output = RunOutput::default();

    for (idx, request) in requests.iter().enumerate() {
        if stop.load(Ordering::SeqCst) {
            debug!("Stop requested, {} of {} requests processed", idx, requests.len());
            output.summary.interrupted = true;
            break;
        }

        debug!("Querying {} ({}/{})", request.track, idx + 1, requests.len());

        let outcome = match client.query(&request.track) {
            Ok(tables) => {
                if tables.is_empty() {
                    ui::status(&format!("no status found for {}", request.track));
                }
                TrackOutcome { request: request.clone(), tables, failure: None }
            }
            Err(QueryError::Interrupted) => {
                debug!("Stop requested while querying {}, dropping its partial result", request.track);
                output.summary.interrupted = true;
                break;
            }
            Err(e) => {
                warn!("query for {} failed: {}", request.track, e);
                ui::print_warning(&format!("could not query {}: {}", request.track, e));
                TrackOutcome { request: request.clone(), tables: Vec::new(), failure: Some(e) }
            }
        };

        output.summary.record(&outcome);
        on_outcome(&outcome)?; // Stream the result immediately
        output.outcomes.push(outcome);
    }

    debug!("Run finished: {:?}", output.summary);
    Ok(output)
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;
