//! Typed records produced by the dump parser.
//!
//! A `DumpSnapshot` owns every `ThreadRecord` parsed from one input text.
//! Both are built once during a single parse pass and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// One thread's metadata and captured stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    /// Display name as declared between the header quotes
    pub name: String,

    /// Runtime-assigned sequence number (`#<n>` in the header)
    pub thread_id: u64,

    /// True when the header carried the `daemon` keyword
    pub daemon: bool,

    /// Scheduling priority (`prio=`)
    pub priority: u32,

    /// OS scheduling priority (`os_prio=`)
    pub os_priority: u32,

    /// Native thread handle, kept exactly as written (e.g. "0x00007f3c2c0a1000")
    pub tid: String,

    /// Native id, kept exactly as written (e.g. "0x4a03")
    pub nid: String,

    /// Raw state reported by the runtime, "UNKNOWN" if the block had no state line
    pub state: String,

    /// Frame lines in printed order, innermost first
    pub stack_frames: Vec<String>,
}

impl ThreadRecord {
    /// First frame of the stack, if any
    pub fn top_frame(&self) -> Option<&str> {
        self.stack_frames.first().map(String::as_str)
    }
}

/// Everything parsed from one thread dump text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpSnapshot {
    /// First date-stamped line near the top of the dump
    pub timestamp: Option<String>,

    /// First "Full thread dump" banner line near the top of the dump
    pub runtime_header: Option<String>,

    /// Threads in dump order
    pub threads: Vec<ThreadRecord>,
}

impl DumpSnapshot {
    /// Number of parsed threads
    pub fn len(&self) -> usize {
        self.threads.len()
    }

    /// True when no thread block was recognized
    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }
}
