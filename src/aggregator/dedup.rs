//! Collapse threads that differ only by a numeric suffix.
//!
//! Worker pools produce many threads named like `pool-1-thread-7`; the
//! detailed listing keeps one representative per base name.

use crate::parser::schema::ThreadRecord;
use log::debug;
use std::collections::HashSet;

/// Base name used as the grouping key
///
/// Strips a trailing `-<digits>`, then any remaining trailing digits, then
/// surrounding whitespace.
///
/// ```
/// use jstack_analyzer::aggregator::dedup::base_name;
///
/// assert_eq!(base_name("pool-1-thread-2"), "pool-1-thread");
/// assert_eq!(base_name("Worker2"), "Worker");
/// ```
pub fn base_name(name: &str) -> &str {
    let without_digits = name.trim_end_matches(|c: char| c.is_ascii_digit());

    // Only strip "-<digits>" when at least one digit was present
    let stripped = if without_digits.len() < name.len() {
        without_digits.strip_suffix('-').unwrap_or(name)
    } else {
        name
    };

    stripped
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim()
}

/// Keep the first thread of each base name group
///
/// **Public** - used to build the detailed thread listing
///
/// Order of first occurrence is preserved. Applying this to its own output
/// returns the same list.
pub fn deduplicate<'a, I>(threads: I) -> Vec<&'a ThreadRecord>
where
    I: IntoIterator<Item = &'a ThreadRecord>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut kept = Vec::new();
    let mut total = 0usize;

    for thread in threads {
        total += 1;
        if seen.insert(base_name(&thread.name)) {
            kept.push(thread);
        }
    }

    debug!("Deduplicated {} threads to {}", total, kept.len());

    kept
}
