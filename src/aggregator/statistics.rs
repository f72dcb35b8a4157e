//! Derive diagnostic statistics from parsed thread records.
//!
//! All statistics are built by a single fold over the records. The result
//! borrows from the snapshot that owns the records.

use super::classifier::{classify_family, StateCategory};
use crate::parser::schema::ThreadRecord;
use crate::utils::config::{BLOCKED_CRITICAL_RATIO, EMPTY_STACK_KEY, TOP_STACK_PATTERNS};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Occurrence counts keyed by string, remembering first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `key`
    pub fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    /// Count for `key`, zero if never seen
    pub fn get(&self, key: &str) -> usize {
        self.index.get(key).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Entries ranked by count, ties kept in first-seen order
    pub fn most_common(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Threads sharing a family label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyGroup<'a> {
    pub family: &'static str,
    pub threads: Vec<&'a ThreadRecord>,
}

/// A leading stack frame and how many threads share it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackPattern {
    pub frame: String,
    pub count: usize,
}

/// Severity of blocked-thread contention
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    None,
    /// At least one thread is blocked
    Warning,
    /// Blocked threads exceed the critical share of all threads
    Critical,
}

/// Statistics computed over all threads of a dump
#[derive(Debug, Clone)]
pub struct Statistics<'a> {
    pub total: usize,
    pub daemon: usize,
    pub non_daemon: usize,

    /// Raw state string -> count
    pub state_counts: FrequencyTable,

    /// Family groups in first-seen order
    pub family_groups: Vec<FamilyGroup<'a>>,

    pub blocked: Vec<&'a ThreadRecord>,
    pub waiting: Vec<&'a ThreadRecord>,
    pub runnable: Vec<&'a ThreadRecord>,

    /// Counts indexed by `StateCategory::index`
    pub category_counts: [usize; 5],

    /// Most common leading frames, highest count first
    pub stack_patterns: Vec<StackPattern>,
}

/// Running totals for the aggregation fold
#[derive(Debug, Default)]
struct Accumulator<'a> {
    total: usize,
    daemon: usize,
    state_counts: FrequencyTable,
    family_groups: Vec<FamilyGroup<'a>>,
    family_index: HashMap<&'static str, usize>,
    blocked: Vec<&'a ThreadRecord>,
    waiting: Vec<&'a ThreadRecord>,
    runnable: Vec<&'a ThreadRecord>,
    category_counts: [usize; 5],
    stack_patterns: FrequencyTable,
}

impl<'a> Accumulator<'a> {
    fn push(mut self, record: &'a ThreadRecord) -> Self {
        self.total += 1;
        if record.daemon {
            self.daemon += 1;
        }

        self.state_counts.add(&record.state);

        let family = classify_family(&record.name);
        match self.family_index.get(family) {
            Some(&i) => self.family_groups[i].threads.push(record),
            None => {
                self.family_index.insert(family, self.family_groups.len());
                self.family_groups.push(FamilyGroup {
                    family,
                    threads: vec![record],
                });
            }
        }

        let category = StateCategory::classify(&record.state);
        self.category_counts[category.index()] += 1;
        match category {
            StateCategory::Blocked => self.blocked.push(record),
            StateCategory::Waiting | StateCategory::TimedWaiting => self.waiting.push(record),
            StateCategory::Runnable => self.runnable.push(record),
            StateCategory::Other => {}
        }

        self.stack_patterns
            .add(record.top_frame().unwrap_or(EMPTY_STACK_KEY));

        self
    }

    fn finish(self) -> Statistics<'a> {
        let stack_patterns = self
            .stack_patterns
            .most_common()
            .into_iter()
            .take(TOP_STACK_PATTERNS)
            .map(|(frame, count)| StackPattern {
                frame: frame.to_string(),
                count,
            })
            .collect();

        Statistics {
            total: self.total,
            daemon: self.daemon,
            non_daemon: self.total - self.daemon,
            state_counts: self.state_counts,
            family_groups: self.family_groups,
            blocked: self.blocked,
            waiting: self.waiting,
            runnable: self.runnable,
            category_counts: self.category_counts,
            stack_patterns,
        }
    }
}

/// Compute statistics over thread records
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `threads` - Records in dump order
///
/// # Returns
/// Statistics borrowing from `threads`
pub fn analyze_threads(threads: &[ThreadRecord]) -> Statistics<'_> {
    debug!("Aggregating statistics over {} threads", threads.len());

    let stats = threads
        .iter()
        .fold(Accumulator::default(), Accumulator::push)
        .finish();

    debug!(
        "{} states, {} families, {} stack patterns",
        stats.state_counts.len(),
        stats.family_groups.len(),
        stats.stack_patterns.len()
    );

    stats
}

/// Share of `count` in `total` as a percentage
///
/// **Public** - returns 0.0 for an empty total instead of dividing by zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

impl<'a> Statistics<'a> {
    /// Percentage of all threads represented by `count`
    pub fn percentage_of_total(&self, count: usize) -> f64 {
        percentage(count, self.total)
    }

    pub fn category_count(&self, category: StateCategory) -> usize {
        self.category_counts[category.index()]
    }

    pub fn category_percentage(&self, category: StateCategory) -> f64 {
        self.percentage_of_total(self.category_count(category))
    }

    /// Most frequent raw state, ties resolved by first occurrence
    pub fn most_common_state(&self) -> Option<&str> {
        let ranked = self.state_counts.most_common();
        ranked.first().map(|&(state, _)| state)
    }

    /// Family with the most threads, ties resolved by first occurrence
    pub fn largest_family(&self) -> Option<&FamilyGroup<'a>> {
        let mut largest: Option<&FamilyGroup<'a>> = None;
        for group in &self.family_groups {
            if largest.map_or(true, |best| group.threads.len() > best.threads.len()) {
                largest = Some(group);
            }
        }
        largest
    }

    /// Family groups ranked by size, ties kept in first-seen order
    pub fn families_by_size(&self) -> Vec<&FamilyGroup<'a>> {
        let mut ranked: Vec<&FamilyGroup<'a>> = self.family_groups.iter().collect();
        ranked.sort_by(|a, b| b.threads.len().cmp(&a.threads.len()));
        ranked
    }

    /// Contention alert level derived from the blocked thread count
    pub fn blocked_alert(&self) -> AlertLevel {
        let blocked = self.blocked.len();
        if blocked == 0 {
            AlertLevel::None
        } else if blocked as f64 > self.total as f64 * BLOCKED_CRITICAL_RATIO {
            AlertLevel::Critical
        } else {
            AlertLevel::Warning
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Threads: {} ({} daemon) | Runnable: {} | Waiting: {} | Blocked: {} | Families: {}",
            self.total,
            self.daemon,
            self.runnable.len(),
            self.waiting.len(),
            self.blocked.len(),
            self.family_groups.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, state: &str, frames: &[&str]) -> ThreadRecord {
        ThreadRecord {
            name: name.to_string(),
            thread_id: 1,
            daemon: false,
            priority: 5,
            os_priority: 0,
            tid: "0x01".to_string(),
            nid: "0x02".to_string(),
            state: state.to_string(),
            stack_frames: frames.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_frequency_table_ranking_is_stable() {
        let mut table = FrequencyTable::new();
        for key in ["b", "a", "c", "a", "b", "d"] {
            table.add(key);
        }

        assert_eq!(table.get("a"), 2);
        assert_eq!(table.get("missing"), 0);
        assert_eq!(table.total(), 6);
        assert_eq!(
            table.most_common(),
            vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]
        );
    }

    #[test]
    fn test_percentage_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(5, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = analyze_threads(&[]);

        assert_eq!(stats.total, 0);
        assert!(stats.state_counts.is_empty());
        assert!(stats.largest_family().is_none());
        assert!(stats.most_common_state().is_none());
        assert_eq!(stats.blocked_alert(), AlertLevel::None);
        for category in StateCategory::ALL {
            assert_eq!(stats.category_percentage(category), 0.0);
        }
    }

    #[test]
    fn test_state_lists_are_exclusive() {
        let threads = vec![
            record("a", "RUNNABLE", &[]),
            record("b", "WAITING (parking)", &[]),
            record("c", "TIMED_WAITING (sleeping)", &[]),
            record("d", "BLOCKED (on object monitor)", &[]),
            record("e", "NEW", &[]),
        ];
        let stats = analyze_threads(&threads);

        assert_eq!(stats.runnable.len(), 1);
        assert_eq!(stats.waiting.len(), 2);
        assert_eq!(stats.blocked.len(), 1);
        assert_eq!(stats.category_count(StateCategory::Other), 1);
        assert_eq!(stats.category_counts.iter().sum::<usize>(), stats.total);
    }

    #[test]
    fn test_stack_patterns_use_empty_key() {
        let threads = vec![
            record("a", "RUNNABLE", &[]),
            record("b", "RUNNABLE", &["at x.y(Z.java:1)"]),
            record("c", "RUNNABLE", &[]),
        ];
        let stats = analyze_threads(&threads);

        assert_eq!(stats.stack_patterns[0].frame, "empty");
        assert_eq!(stats.stack_patterns[0].count, 2);
        assert_eq!(stats.stack_patterns[1].frame, "at x.y(Z.java:1)");
    }

    #[test]
    fn test_stack_patterns_truncated() {
        let frames: Vec<String> = (0..15).map(|i| format!("at f{}()", i)).collect();
        let threads: Vec<ThreadRecord> = frames
            .iter()
            .map(|f| record("t", "RUNNABLE", &[f.as_str()]))
            .collect();
        let stats = analyze_threads(&threads);

        assert_eq!(stats.stack_patterns.len(), TOP_STACK_PATTERNS);
        // All counts tie, so first-seen order is kept
        assert_eq!(stats.stack_patterns[0].frame, "at f0()");
        assert_eq!(stats.stack_patterns[9].frame, "at f9()");
    }

    #[test]
    fn test_blocked_alert_levels() {
        let mut threads: Vec<ThreadRecord> =
            (0..20).map(|_| record("t", "RUNNABLE", &[])).collect();
        threads.push(record("b", "BLOCKED", &[]));
        assert_eq!(analyze_threads(&threads).blocked_alert(), AlertLevel::Warning);

        threads.extend((0..5).map(|_| record("b", "BLOCKED", &[])));
        assert_eq!(analyze_threads(&threads).blocked_alert(), AlertLevel::Critical);
    }

    #[test]
    fn test_largest_family_tie_keeps_first() {
        let threads = vec![
            record("main", "RUNNABLE", &[]),
            record("pool-1-thread-1", "RUNNABLE", &[]),
        ];
        let stats = analyze_threads(&threads);

        assert_eq!(stats.largest_family().unwrap().family, "Other");
    }
}
