//! Split raw dump text into per-thread blocks.
//!
//! A block starts at any line beginning (column 0) with a quoted thread name
//! and runs until the next such line or the end of input. Lines before the
//! first block (banner, timestamp, blank lines) belong to no block.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"[^"]+""#).expect("block start pattern is valid"));

/// Check whether a line opens a new thread block
pub fn is_block_start(line: &str) -> bool {
    BLOCK_START.is_match(line)
}

/// Lazy iterator over thread blocks of a dump
///
/// Each item borrows from the input and is trimmed of surrounding whitespace.
#[derive(Debug, Clone)]
pub struct ThreadBlocks<'a> {
    rest: &'a str,
}

impl<'a> ThreadBlocks<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { rest: content }
    }
}

impl<'a> Iterator for ThreadBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = find_block_start(self.rest, 0)?;

            // The header line always belongs to its own block, so resume
            // the search after it.
            let header_end = line_end(self.rest, start);
            let end = find_block_start(self.rest, header_end).unwrap_or(self.rest.len());

            let block = self.rest[start..end].trim();
            self.rest = &self.rest[end..];

            if !block.is_empty() {
                return Some(block);
            }
        }
    }
}

/// Split dump content into thread blocks
///
/// **Public** - main entry point for block splitting
pub fn split_thread_blocks(content: &str) -> ThreadBlocks<'_> {
    ThreadBlocks::new(content)
}

/// Byte offset of the first block-start line at or after `from`
///
/// `from` must sit at the beginning of a line.
fn find_block_start(text: &str, from: usize) -> Option<usize> {
    let mut offset = from;
    for line in text[from..].split_inclusive('\n') {
        if is_block_start(line) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Byte offset just past the line starting at `start`
fn line_end(text: &str, start: usize) -> usize {
    text[start..]
        .find('\n')
        .map(|pos| start + pos + 1)
        .unwrap_or(text.len())
}
