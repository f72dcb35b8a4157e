//! Configuration and constants for the analyzer.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default path for the HTML report
pub const DEFAULT_OUTPUT_FILE: &str = "jstack_report.html";

// Banner and timestamp lines are only looked for near the top of the dump
pub const HEADER_SCAN_LINES: usize = 10;
pub const BANNER_MARKER: &str = "Full thread dump";

/// Prefix of the line declaring a thread's state inside a block
pub const STATE_LINE_PREFIX: &str = "java.lang.Thread.State:";

/// State used when a block carries no state line
pub const UNKNOWN_STATE: &str = "UNKNOWN";

/// Stack pattern key for threads without any frames
pub const EMPTY_STACK_KEY: &str = "empty";

/// Number of leading-frame patterns kept in the statistics
pub const TOP_STACK_PATTERNS: usize = 10;

/// Blocked threads above this share of all threads raise a critical alert
pub const BLOCKED_CRITICAL_RATIO: f64 = 0.1;

// Display limits used by the HTML renderer
pub const MAX_NAME_DISPLAY: usize = 50;
pub const MAX_PATTERN_DISPLAY: usize = 100;
pub const STACK_PREVIEW_FRAMES: usize = 3;
