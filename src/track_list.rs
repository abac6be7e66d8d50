/// Track list parsing
///
/// This module handles:
/// - Reading the track list file
/// - Skipping `#` comment lines
/// - Splitting `track - description - extra` lines into requests
use crate::types::TrackingRequest;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static! {
    // Fields are non-greedy, so a description containing " - " is split at
    // its first separator and the remainder ends up in `extra`.
    static ref LINE_RE: Regex =
        Regex::new(r"^(?P<track>.*?)\s+-\s+(?P<desc>.*?)\s+-\s+(?P<extra>.*?)$").expect("track line regex is valid");
}

/// Parse a single line, returning None for comments and lines that don't match
pub fn parse_line(line: &str) -> Option<TrackingRequest> {
    if line.starts_with('#') {
        return None;
    }

    let caps = LINE_RE.captures(line)?;
    Some(TrackingRequest::new(&caps["track"], &caps["desc"], &caps["extra"]))
}

/// Parse track list lines in order, silently dropping anything that isn't a request
pub fn parse_track_list<'a, I>(lines: I) -> Vec<TrackingRequest>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut requests = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        match parse_line(line) {
            Some(request) => requests.push(request),
            None => debug!("skipping track list line {}: {:?}", idx + 1, line),
        }
    }
    requests
}

/// Read and parse a track list file
pub fn read_track_list(path: &Path) -> Result<Vec<TrackingRequest>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read track list {}: {}", path.display(), e))?;
    let requests = parse_track_list(content.lines());
    debug!("read {} tracking requests from {}", requests.len(), path.display());
    Ok(requests)
}
