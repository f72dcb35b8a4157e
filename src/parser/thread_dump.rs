//! Main parser for jstack thread dumps.
//!
//! Turns raw dump text into a `DumpSnapshot`. Blocks whose header does not
//! follow the grammar are dropped silently; the rest of the dump is unaffected.

use super::body::parse_body;
use super::header::parse_header;
use super::schema::{DumpSnapshot, ThreadRecord};
use super::splitter::split_thread_blocks;
use crate::utils::config::{BANNER_MARKER, HEADER_SCAN_LINES};
use crate::utils::error::AnalyzeError;
use log::{debug, info, warn};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static TIMESTAMP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").expect("timestamp pattern is valid"));

/// Parse a complete thread dump
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `content` - Full text of the dump
///
/// # Returns
/// Snapshot with banner metadata and every well-formed thread, in dump order
pub fn parse_dump(content: &str) -> DumpSnapshot {
    let (timestamp, runtime_header) = extract_dump_metadata(content);

    let mut dropped = 0usize;
    let threads: Vec<ThreadRecord> = split_thread_blocks(content)
        .filter_map(|block| {
            let record = parse_thread_block(block);
            if record.is_none() {
                dropped += 1;
            }
            record
        })
        .collect();

    debug!(
        "Parsed {} threads ({} blocks dropped)",
        threads.len(),
        dropped
    );

    if threads.is_empty() {
        warn!("No thread blocks recognized in dump");
    }

    DumpSnapshot {
        timestamp,
        runtime_header,
        threads,
    }
}

/// Read and parse a dump file
///
/// **Public** - used by the analyze command
///
/// # Errors
/// * `AnalyzeError::InputNotFound` - Path does not exist
/// * `AnalyzeError::ReadFailed` - File could not be read as UTF-8 text
pub fn parse_dump_file(path: impl AsRef<Path>) -> Result<DumpSnapshot, AnalyzeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnalyzeError::InputNotFound(path.display().to_string()));
    }

    info!("Reading thread dump: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    debug!("Read {} bytes", content.len());

    Ok(parse_dump(&content))
}

/// Parse a single block into a record
///
/// **Public** - returns `None` when the header line is malformed
pub fn parse_thread_block(block: &str) -> Option<ThreadRecord> {
    let mut lines = block.lines();
    let header = parse_header(lines.next()?)?;
    let body = parse_body(lines);

    Some(ThreadRecord {
        name: header.name,
        thread_id: header.thread_id,
        daemon: header.daemon,
        priority: header.priority,
        os_priority: header.os_priority,
        tid: header.tid,
        nid: header.nid,
        state: body.state,
        stack_frames: body.stack_frames,
    })
}

/// Find the timestamp and banner lines at the top of a dump
///
/// **Private** - only the first few lines are inspected, independent of
/// block splitting. The first match of each kind wins.
fn extract_dump_metadata(content: &str) -> (Option<String>, Option<String>) {
    let mut timestamp = None;
    let mut runtime_header = None;

    for line in content.lines().take(HEADER_SCAN_LINES) {
        if line.contains(BANNER_MARKER) {
            runtime_header.get_or_insert_with(|| line.trim().to_string());
        } else if TIMESTAMP_PATTERN.is_match(line) {
            timestamp.get_or_insert_with(|| line.trim().to_string());
        }
    }

    (timestamp, runtime_header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_metadata() {
        let content = "2024-03-05 14:22:01\nFull thread dump OpenJDK 64-Bit Server VM (25.372-b07 mixed mode):\n\n";
        let (timestamp, banner) = extract_dump_metadata(content);

        assert_eq!(timestamp.as_deref(), Some("2024-03-05 14:22:01"));
        assert_eq!(
            banner.as_deref(),
            Some("Full thread dump OpenJDK 64-Bit Server VM (25.372-b07 mixed mode):")
        );
    }

    #[test]
    fn test_metadata_beyond_scan_window_is_ignored() {
        let mut content = "\n".repeat(HEADER_SCAN_LINES);
        content.push_str("2024-03-05 14:22:01\n");

        assert_eq!(extract_dump_metadata(&content), (None, None));
    }

    #[test]
    fn test_first_timestamp_wins() {
        let content = "2024-01-01 00:00:00\n2025-01-01 00:00:00\n";
        let (timestamp, _) = extract_dump_metadata(content);
        assert_eq!(timestamp.as_deref(), Some("2024-01-01 00:00:00"));
    }

    #[test]
    fn test_parse_thread_block_rejects_bad_header() {
        assert!(parse_thread_block("\"a\" #1 prio=5\n\tat x").is_none());
    }
}
