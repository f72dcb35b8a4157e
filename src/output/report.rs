//! Report schema consumed by the HTML and JSON writers.
//!
//! A `Report` is an owned, serializable copy of everything the renderers need,
//! so it can outlive the snapshot it was built from. Schema is versioned to
//! allow future evolution.

use crate::aggregator::{deduplicate, AlertLevel, StateCategory, Statistics};
use crate::parser::schema::{DumpSnapshot, ThreadRecord};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level report structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Timestamp line found in the dump, if any
    pub timestamp: Option<String>,

    /// Runtime banner found in the dump, if any
    pub runtime_header: Option<String>,

    pub summary: ThreadSummary,

    /// Raw states ranked by count
    pub states: Vec<CountEntry>,

    /// State categories in fixed order
    pub categories: Vec<CategoryEntry>,

    /// Families ranked by size
    pub families: Vec<CountEntry>,

    /// Most common leading frames
    pub stack_patterns: Vec<CountEntry>,

    /// One representative thread per base name, in dump order
    pub threads: Vec<ThreadRecord>,
}

/// Headline numbers of a dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub total: usize,
    pub daemon: usize,
    pub non_daemon: usize,
    pub runnable: usize,
    pub waiting: usize,
    pub blocked: usize,
    pub most_common_state: Option<String>,
    pub largest_family: Option<String>,
    pub blocked_alert: AlertLevel,
}

/// A labelled count with its share of all threads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count for one state category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub category: StateCategory,
    pub count: usize,
    pub percentage: f64,
}

/// Build a report from a snapshot and its statistics
///
/// **Public** - used by the analyze command before rendering
pub fn build_report(snapshot: &DumpSnapshot, stats: &Statistics<'_>) -> Report {
    let entry = |label: &str, count: usize| CountEntry {
        label: label.to_string(),
        count,
        percentage: stats.percentage_of_total(count),
    };

    let states = stats
        .state_counts
        .most_common()
        .into_iter()
        .map(|(state, count)| entry(state, count))
        .collect();

    let categories = StateCategory::ALL
        .iter()
        .map(|&category| CategoryEntry {
            category,
            count: stats.category_count(category),
            percentage: stats.category_percentage(category),
        })
        .collect();

    let families = stats
        .families_by_size()
        .into_iter()
        .map(|group| entry(group.family, group.threads.len()))
        .collect();

    let stack_patterns = stats
        .stack_patterns
        .iter()
        .map(|pattern| entry(pattern.frame.as_str(), pattern.count))
        .collect();

    let threads = deduplicate(&snapshot.threads)
        .into_iter()
        .cloned()
        .collect();

    Report {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        timestamp: snapshot.timestamp.clone(),
        runtime_header: snapshot.runtime_header.clone(),
        summary: ThreadSummary {
            total: stats.total,
            daemon: stats.daemon,
            non_daemon: stats.non_daemon,
            runnable: stats.runnable.len(),
            waiting: stats.waiting.len(),
            blocked: stats.blocked.len(),
            most_common_state: stats.most_common_state().map(str::to_string),
            largest_family: stats.largest_family().map(|g| g.family.to_string()),
            blocked_alert: stats.blocked_alert(),
        },
        states,
        categories,
        families,
        stack_patterns,
        threads,
    }
}
