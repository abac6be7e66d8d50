/// Configuration resolution module
///
/// This module handles:
/// - Building a RunConfig from CLI arguments
/// - Resolving the search endpoint (flag, environment, default)
/// - Deciding where the report goes (stdout, file, nowhere)
/// - Assembling SMTP settings when a recipient is given
use crate::cli::CliArgs;
use crate::mail::MailSettings;
use crate::query::BELPOST_URL;
use crate::types::ReportFormat;
use log::debug;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the search endpoint
pub const ENDPOINT_ENV: &str = "BELPOST_ENDPOINT";

/// Where rendered blocks are written while the run progresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
    Silent,
}

impl OutputSink {
    /// Open the sink; `None` means nothing should be written
    pub fn open(&self) -> io::Result<Option<Box<dyn Write>>> {
        match self {
            OutputSink::Stdout => Ok(Some(Box::new(io::stdout()))),
            OutputSink::File(path) => Ok(Some(Box::new(BufWriter::new(File::create(path)?)))),
            OutputSink::Silent => Ok(None),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            OutputSink::Stdout => "stdout".to_string(),
            OutputSink::File(path) => path.display().to_string(),
            OutputSink::Silent => "nowhere (silent)".to_string(),
        }
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub track_list: PathBuf,
    pub format: ReportFormat,
    pub sink: OutputSink,
    pub endpoint: String,
    pub retry: u32,
    pub retry_delay: Duration,
    pub timeout: Duration,
    pub json_path: Option<PathBuf>,
    pub mail: Option<MailSettings>,
}

/// Build a complete RunConfig from CLI arguments
///
/// Everything is resolved upfront so the runner receives an immutable,
/// validated description of the run.
pub fn build_run_config(args: &CliArgs) -> Result<RunConfig, String> {
    debug!("Building run config from CLI args");

    let endpoint = resolve_endpoint(args.endpoint.as_deref(), env::var(ENDPOINT_ENV).ok());
    debug!("Using endpoint {}", endpoint);

    let config = RunConfig {
        track_list: args.tracks.clone(),
        format: args.format,
        sink: resolve_sink(args),
        endpoint,
        retry: args.retry,
        retry_delay: Duration::from_millis(args.retry_delay),
        timeout: Duration::from_secs(args.timeout),
        json_path: args.json.clone(),
        mail: resolve_mail(args),
    };

    debug!("Report goes to {}", config.sink.describe());
    Ok(config)
}

/// Pick the endpoint: explicit flag, then environment, then the public service
fn resolve_endpoint(flag: Option<&str>, env_value: Option<String>) -> String {
    flag.map(|s| s.to_string())
        .or_else(|| env_value.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| BELPOST_URL.to_string())
}

fn resolve_sink(args: &CliArgs) -> OutputSink {
    match (&args.output, args.silent) {
        (Some(path), _) => OutputSink::File(path.clone()),
        (None, true) => OutputSink::Silent,
        (None, false) => OutputSink::Stdout,
    }
}

fn resolve_mail(args: &CliArgs) -> Option<MailSettings> {
    let to = args.to_address.as_ref()?.trim().to_string();
    // An empty sender would be rejected by the relay; reuse the recipient.
    let from = if args.from_address.is_empty() { to.clone() } else { args.from_address.clone() };

    Some(MailSettings {
        to,
        from,
        server: args.smtp_server.clone(),
        port: args.smtp_port,
        user: args.smtp_user.clone(),
        password: args.smtp_pass.clone(),
        tls: args.smtp_tls,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
