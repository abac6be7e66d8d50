/// Tracking service client
///
/// This module handles:
/// - HTTP requests to the Belpost search endpoint
/// - Retrying while the service answers without any result table
/// - Mapping HTTP failures to `QueryError`
use crate::error::QueryError;
use crate::extract::extract_tables;
use crate::types::ResultTable;
use log::debug;
use std::io::{self, Read};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Default search endpoint
pub const BELPOST_URL: &str = "http://search.belpost.by/ajax/search/";

/// Additional attempts after the first when the service returns no tables
pub const DEFAULT_RETRY: u32 = 5;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("belpost-tracker/", env!("CARGO_PKG_VERSION"));

/// Anything that can return the raw search page for a tracking code
pub trait PageSource {
    fn fetch(&self, track: &str) -> Result<String, QueryError>;
}

/// Fetches search pages over HTTP
pub struct HttpSource {
    agent: ureq::Agent,
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).user_agent(USER_AGENT).build();
        Self { agent, endpoint: endpoint.into() }
    }
}

impl PageSource for HttpSource {
    fn fetch(&self, track: &str) -> Result<String, QueryError> {
        debug!("GET {}?internal=2&item={}", self.endpoint, track);

        let resp = self.agent.get(&self.endpoint).query("internal", "2").query("item", track).call().map_err(
            |e| match e {
                ureq::Error::Status(code, _) => QueryError::Status { code, url: self.endpoint.clone() },
                other => QueryError::Transport { url: self.endpoint.clone(), message: other.to_string() },
            },
        )?;

        // ureq's into_string() replaces invalid UTF-8; the service must send UTF-8
        let mut bytes = Vec::new();
        resp.into_reader().read_to_end(&mut bytes)?;
        String::from_utf8(bytes).map_err(|e| QueryError::Body(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

/// Queries one tracking code at a time with a bounded retry on empty results
pub struct QueryClient<S> {
    source: S,
    retry: u32,
    retry_delay: Duration,
    stop: Option<Arc<AtomicBool>>,
}

impl<S: PageSource> QueryClient<S> {
    pub fn new(source: S) -> Self {
        Self { source, retry: DEFAULT_RETRY, retry_delay: Duration::ZERO, stop: None }
    }

    pub fn with_retry(mut self, retry: u32) -> Self {
        self.retry = retry;
        self
    }

    /// Pause between empty-result attempts (zero retries immediately)
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Abandon the retry loop once `stop` is set
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    fn stop_requested(&self) -> bool {
        self.stop.as_ref().is_some_and(|s| s.load(Ordering::SeqCst))
    }

    pub fn retry(&self) -> u32 {
        self.retry
    }

    /// Fetch and extract the result tables for `track`.
    ///
    /// Makes at most `retry + 1` attempts and stops at the first one that
    /// yields a table. Running out of attempts returns an empty list, not an
    /// error. A `QueryError` from the source ends the query immediately and
    /// does not use up the retry budget. The stop flag is checked before
    /// every retry; once set the query ends with `QueryError::Interrupted`.
    pub fn query(&self, track: &str) -> Result<Vec<ResultTable>, QueryError> {
        let mut attempt: u32 = 0;
        loop {
            if attempt > 0 && self.stop_requested() {
                debug!("{}: stop requested after {} attempts", track, attempt);
                return Err(QueryError::Interrupted);
            }
            attempt += 1;
            let page = self.source.fetch(track)?;
            let tables = extract_tables(&page);

            if !tables.is_empty() {
                debug!("{}: {} tables on attempt {}", track, tables.len(), attempt);
                return Ok(tables);
            }
            if attempt > self.retry {
                debug!("{}: no tables after {} attempts", track, attempt);
                return Ok(tables);
            }

            debug!("{}: empty response, retrying ({}/{})", track, attempt, self.retry);
            if !self.retry_delay.is_zero() {
                thread::sleep(self.retry_delay);
            }
        }
    }
}
