//! JStack Analyzer
//!
//! Parses JVM thread dumps (`jstack` output) into typed thread records and
//! derives diagnostic statistics: state distribution, thread families,
//! blocked-thread alerts and common stack patterns.
//!
//! This crate provides the core implementation for the
//! `jstack-analyzer` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! jstack <pid> > dump.txt
//! jstack-analyzer dump.txt -o report.html --theme modern
//! ```
//!
//! The parser and aggregator can also be used directly:
//!
//! ```
//! use jstack_analyzer::aggregator::analyze_threads;
//! use jstack_analyzer::parser::parse_dump;
//!
//! let dump = "\"main\" #1 prio=5 os_prio=0 tid=0x01 nid=0x02 runnable\n   java.lang.Thread.State: RUNNABLE\n";
//! let snapshot = parse_dump(dump);
//! let stats = analyze_threads(&snapshot.threads);
//! assert_eq!(stats.runnable.len(), 1);
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
