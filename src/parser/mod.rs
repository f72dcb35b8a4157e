//! Thread dump parsing and record definitions.
//!
//! This module handles:
//! - Splitting raw dump text into thread blocks
//! - Parsing header lines with a fixed grammar
//! - Extracting thread state and stack frames
//! - Extracting the dump banner and timestamp

pub mod body;
pub mod header;
pub mod schema;
pub mod splitter;
pub mod thread_dump;

// Re-export main types
pub use header::{parse_header, ThreadHeader};
pub use schema::{DumpSnapshot, ThreadRecord};
pub use splitter::{split_thread_blocks, ThreadBlocks};
pub use thread_dump::{parse_dump, parse_dump_file, parse_thread_block};
