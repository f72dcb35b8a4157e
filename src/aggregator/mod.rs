//! Aggregation of parsed threads into diagnostic statistics.
//!
//! This module transforms thread records into:
//! - Family and state category classification
//! - Counts, groupings and stack pattern rankings
//! - A deduplicated view for detailed listings

pub mod classifier;
pub mod dedup;
pub mod statistics;

// Re-export main types and functions
pub use classifier::{classify_family, StateCategory, FAMILY_PATTERNS};
pub use dedup::{base_name, deduplicate};
pub use statistics::{
    analyze_threads, percentage, AlertLevel, FamilyGroup, FrequencyTable, StackPattern, Statistics,
};
