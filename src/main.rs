mod cli;
mod config;
mod console_format;
mod error;
mod extract;
mod mail;
mod query;
mod report;
mod runner;
mod track_list;
mod types;
mod ui;

use log::{debug, warn};
use mail::SmtpMailer;
use query::{HttpSource, QueryClient};
use report::Report;
use std::io::Write;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        process::exit(1);
    }

    let config = match config::build_run_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            process::exit(1);
        }
    };

    let requests = match track_list::read_track_list(&config.track_list) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            process::exit(1);
        }
    };
    if requests.is_empty() {
        ui::status(&format!("no tracks found in {}", config.track_list.display()));
    }

    let mut sink = match config.sink.open() {
        Ok(s) => s,
        Err(e) => {
            ui::print_error(&format!("Failed to open {}: {}", config.sink.describe(), e));
            process::exit(1);
        }
    };

    let stop = install_stop_handler();

    let client = QueryClient::new(HttpSource::new(&config.endpoint, config.timeout))
        .with_retry(config.retry)
        .with_retry_delay(config.retry_delay)
        .with_stop_flag(Arc::clone(&stop));

    // Query each track and stream its block to the sink as soon as it is rendered
    let mut report = Report::new(config.format);
    let output = match runner::run_tracks(&requests, &client, &stop, |outcome| {
        let block = report.append(&outcome.request, &outcome.tables);
        if let Some(ref mut writer) = sink {
            writer
                .write_all(block.as_bytes())
                .and_then(|_| writer.flush())
                .map_err(|e| format!("Failed to write report to {}: {}", config.sink.describe(), e))?;
        }
        Ok(())
    }) {
        Ok(o) => o,
        Err(e) => {
            ui::print_error(&e);
            process::exit(1);
        }
    };
    drop(sink);

    let summary = &output.summary;
    if summary.interrupted {
        ui::status("Stopped");
        return;
    }

    ui::status(&format!(
        "{} tracks: {} with status, {} without, {} failed",
        summary.processed, summary.with_data, summary.empty, summary.failed
    ));

    // Export structured results if requested
    if let Some(ref json_path) = config.json_path {
        match report::export_json_report(&output.outcomes, summary, report.format(), json_path) {
            Ok(_) => ui::status(&format!("JSON report saved to: {}", json_path.display())),
            Err(e) => ui::print_warning(&format!("Failed to save JSON report: {}", e)),
        }
    }

    // Email the whole report; failures are reported and otherwise ignored
    if let Some(settings) = config.mail.clone() {
        let to = settings.to.clone();
        if mail::deliver_report(&SmtpMailer::new(settings), report.as_str()) {
            ui::status(&format!("report sent to {}", to));
        }
    }
}

/// Install a Ctrl-C handler that asks the run to stop after the current track.
///
/// A second Ctrl-C exits right away.
fn install_stop_handler() -> Arc<AtomicBool> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);

    let installed = ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::SeqCst) {
            ui::status("Stopped");
            process::exit(0);
        }
        ui::status("stopping after the current track (Ctrl-C again to quit now)");
    });

    match installed {
        Ok(()) => debug!("Ctrl-C handler installed"),
        Err(e) => warn!("could not install Ctrl-C handler: {}", e),
    }

    stop
}
