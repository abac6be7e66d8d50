//! Error types for recoverable per-request and delivery failures.
//!
//! Configuration problems are reported as plain `String` messages by the
//! `cli` and `config` modules; only failures a caller may want to react to
//! individually get their own type here.

use thiserror::Error;

/// The tracking service could not be queried for one code
#[derive(Error, Debug)]
pub enum QueryError {
    /// The service answered with a non-2xx status
    #[error("service returned HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// Connection, DNS, TLS or timeout failure
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The response body could not be read as text
    #[error("could not read response body: {0}")]
    Body(#[from] std::io::Error),

    /// A stop was requested before the service returned any table
    #[error("stopped before the service answered")]
    Interrupted,
}

/// The finished report could not be emailed
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("invalid mail address '{address}': {message}")]
    Address { address: String, message: String },

    #[error("could not build message: {0}")]
    Message(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}
