use crate::mail::DEFAULT_SMTP_PORT;
use crate::query::{DEFAULT_RETRY, DEFAULT_TIMEOUT};
use crate::types::ReportFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "belpost-tracker")]
#[command(about = "Report the status history of Belpost parcels listed in a text file")]
#[command(version)]
pub struct CliArgs {
    /// Plain text file with parcel tracks, one "TRACK - DESCRIPTION - DETAILS" per line
    #[arg(long = "list", short = 'l', value_name = "PATH")]
    pub tracks: PathBuf,

    /// Output report format
    #[arg(long, short = 'f', value_enum)]
    pub format: ReportFormat,

    /// File name for report (default: standard output)
    #[arg(long, short = 'o', value_name = "PATH", conflicts_with = "silent")]
    pub output: Option<PathBuf>,

    /// Enable silent mode (don't write the report anywhere but email)
    #[arg(long, short = 's')]
    pub silent: bool,

    /// Extra attempts per track when the service returns no status table
    #[arg(long, default_value_t = DEFAULT_RETRY)]
    pub retry: u32,

    /// Milliseconds to wait between empty-result attempts
    #[arg(long, value_name = "MS", default_value = "0")]
    pub retry_delay: u64,

    /// Seconds before an HTTP request to the tracking service is abandoned
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Search endpoint of the tracking service (also BELPOST_ENDPOINT)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Also save the extracted tables as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Specify the primary recipient of the emails generated
    #[arg(long = "to", value_name = "ADDRESS", help_heading = "EMAIL Notification")]
    pub to_address: Option<String>,

    /// Specify the sender of the emails (default: the recipient)
    #[arg(long = "from", value_name = "ADDRESS", default_value = "", help_heading = "EMAIL Notification")]
    pub from_address: String,

    /// Username for SMTP-AUTH
    #[arg(long, value_name = "USER", default_value = "", help_heading = "EMAIL Notification")]
    pub smtp_user: String,

    /// Password for SMTP-AUTH
    #[arg(long, value_name = "PASSWORD", default_value = "", help_heading = "EMAIL Notification")]
    pub smtp_pass: String,

    /// Specifies the outgoing SMTP server to use
    #[arg(long, value_name = "HOST", default_value = "127.0.0.1", help_heading = "EMAIL Notification")]
    pub smtp_server: String,

    /// Specifies a port different from the default port
    #[arg(long, value_name = "PORT", default_value_t = DEFAULT_SMTP_PORT, help_heading = "EMAIL Notification")]
    pub smtp_port: u16,

    /// Use STARTTLS when talking to the SMTP server
    #[arg(long, help_heading = "EMAIL Notification")]
    pub smtp_tls: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();
        args.from_address = args.from_address.trim().to_string();
        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("--timeout must be at least 1 second".to_string());
        }

        if let Some(ref endpoint) = self.endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(format!("--endpoint must be an http(s) URL, got '{}'", endpoint));
        }

        let smtp_options_used = !self.from_address.is_empty() || !self.smtp_user.is_empty() || self.smtp_tls;
        if self.to_address.is_none() && smtp_options_used {
            return Err("Email options were given without --to <ADDRESS>".to_string());
        }

        if let Some(ref to) = self.to_address
            && to.trim().is_empty()
        {
            return Err("--to requires a non-empty address".to_string());
        }

        Ok(())
    }
}
