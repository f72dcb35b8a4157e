//! Thread family and state category classification.
//!
//! Both classifications are pure and total: every input maps to exactly one
//! result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name substrings and the family they identify, in priority order
///
/// The first pattern contained in a thread name wins. Order matters when a
/// name contains several patterns.
pub const FAMILY_PATTERNS: &[(&str, &str)] = &[
    ("nioEventLoopGroup", "Netty NIO"),
    ("grpc", "gRPC"),
    ("OkHttp", "OkHttp"),
    ("pool-", "Thread Pool"),
    ("Keep-Alive", "HTTP Keep-Alive"),
    ("Attach Listener", "JVM Attach"),
    ("Finalizer", "JVM Finalizer"),
    ("Reference Handler", "JVM Reference"),
    ("Signal Dispatcher", "JVM Signal"),
    ("C2 CompilerThread", "JIT Compiler"),
    ("VM Thread", "JVM VM"),
    ("Safepoint", "JVM Safepoint"),
];

/// Family label for names matching no pattern
pub const OTHER_FAMILY: &str = "Other";

/// Map a thread name to its family label
///
/// **Public** - used by the aggregator for family grouping
pub fn classify_family(thread_name: &str) -> &'static str {
    FAMILY_PATTERNS
        .iter()
        .find(|(pattern, _)| thread_name.contains(pattern))
        .map(|(_, family)| *family)
        .unwrap_or(OTHER_FAMILY)
}

/// Coarse state category derived from a raw state string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateCategory {
    Runnable,
    Waiting,
    TimedWaiting,
    Blocked,
    Other,
}

impl StateCategory {
    /// All categories, in display order
    pub const ALL: [StateCategory; 5] = [
        StateCategory::Runnable,
        StateCategory::Waiting,
        StateCategory::TimedWaiting,
        StateCategory::Blocked,
        StateCategory::Other,
    ];

    /// Classify a raw state string (case-insensitive)
    ///
    /// **Public** - checks run in a fixed order; the first hit decides
    pub fn classify(state: &str) -> Self {
        let state = state.to_lowercase();

        if state.contains("runnable") {
            StateCategory::Runnable
        } else if state.contains("waiting") && !state.contains("timed") {
            StateCategory::Waiting
        } else if state.contains("timed_waiting") || state.contains("timed waiting") {
            StateCategory::TimedWaiting
        } else if state.contains("blocked") {
            StateCategory::Blocked
        } else {
            StateCategory::Other
        }
    }

    /// Position in `ALL`
    pub fn index(self) -> usize {
        match self {
            StateCategory::Runnable => 0,
            StateCategory::Waiting => 1,
            StateCategory::TimedWaiting => 2,
            StateCategory::Blocked => 3,
            StateCategory::Other => 4,
        }
    }

    /// CSS class used for state badges in the HTML report
    pub fn css_class(self) -> &'static str {
        match self {
            StateCategory::Runnable => "state-runnable",
            StateCategory::Waiting => "state-waiting",
            StateCategory::TimedWaiting => "state-timed_waiting",
            StateCategory::Blocked => "state-blocked",
            StateCategory::Other => "state-other",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            StateCategory::Runnable => "Runnable",
            StateCategory::Waiting => "Waiting",
            StateCategory::TimedWaiting => "Timed Waiting",
            StateCategory::Blocked => "Blocked",
            StateCategory::Other => "Other",
        }
    }
}

impl fmt::Display for StateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
