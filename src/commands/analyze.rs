//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Reads and parses the thread dump
//! 2. Aggregates statistics
//! 3. Builds the report (with deduplicated thread listing)
//! 4. Renders and writes the HTML report
//! 5. Optionally writes the JSON report

use super::models::{AnalyzeArgs, AnalyzeOutcome};
use crate::aggregator::{analyze_threads, Statistics};
use crate::output::{build_report, render_html, write_html, write_report, Report};
use crate::parser::parse_dump_file;
use crate::utils::error::AnalyzeError;
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Missing or unreadable input file (nothing is written)
/// * File write errors
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<AnalyzeOutcome> {
    let start_time = Instant::now();

    // Step 1: Parse dump
    info!("Step 1/4: Parsing thread dump...");
    let snapshot = parse_dump_file(&args.input)
        .with_context(|| format!("Failed to load thread dump {}", args.input.display()))?;

    debug!(
        "Parsed {} threads (timestamp: {:?})",
        snapshot.len(),
        snapshot.timestamp
    );

    // Step 2: Aggregate
    info!("Step 2/4: Aggregating thread statistics...");
    let stats = analyze_threads(&snapshot.threads);
    info!("{}", stats.summary());

    // Step 3: Build report
    info!("Step 3/4: Building report...");
    let report = build_report(&snapshot, &stats);
    debug!(
        "Report lists {} of {} threads after deduplication",
        report.threads.len(),
        stats.total
    );

    // Step 4: Write outputs
    info!("Step 4/4: Writing output files...");
    let html = render_html(&report, args.theme);
    write_html(&html, &args.output_html).context("Failed to write HTML report")?;

    if let Some(json_path) = &args.output_json {
        write_report(&report, json_path).context("Failed to write JSON report")?;
    }

    if args.print_summary {
        print_summary(&report, &stats);
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(AnalyzeOutcome {
        thread_count: snapshot.len(),
        html_path: args.output_html.clone(),
        json_path: args.output_json.clone(),
    })
}

/// Validate analyze arguments before doing any work
///
/// **Public** - called by main.rs before execute_analyze
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(AnalyzeError::InputNotFound(args.input.display().to_string()).into());
    }

    if args.input.is_dir() {
        bail!("Input path is a directory: {}", args.input.display());
    }

    if let Some(json_path) = &args.output_json {
        if json_path == &args.output_html {
            bail!("HTML and JSON outputs must use different paths");
        }
    }

    Ok(())
}

/// Print a text summary to stdout
///
/// **Private** - internal helper for execute_analyze
fn print_summary(report: &Report, stats: &Statistics<'_>) {
    let summary = &report.summary;

    println!("\n{}", "=".repeat(80));
    println!("THREAD DUMP SUMMARY");
    println!("{}", "=".repeat(80));
    if let Some(timestamp) = &report.timestamp {
        println!("Timestamp:    {}", timestamp);
    }
    if let Some(banner) = &report.runtime_header {
        println!("JVM:          {}", banner);
    }
    println!(
        "Threads:      {} ({} daemon, {} non-daemon)",
        summary.total, summary.daemon, summary.non_daemon
    );
    println!(
        "Runnable:     {} ({:.1}%)",
        summary.runnable,
        stats.percentage_of_total(summary.runnable)
    );
    println!(
        "Waiting:      {} ({:.1}%)",
        summary.waiting,
        stats.percentage_of_total(summary.waiting)
    );
    println!(
        "Blocked:      {} ({:.1}%)",
        summary.blocked,
        stats.percentage_of_total(summary.blocked)
    );
    println!(
        "Top state:    {}",
        summary.most_common_state.as_deref().unwrap_or("N/A")
    );
    println!(
        "Top family:   {}",
        summary.largest_family.as_deref().unwrap_or("N/A")
    );

    if !report.stack_patterns.is_empty() {
        println!("\nTop stack patterns:");
        for (i, pattern) in report.stack_patterns.iter().enumerate() {
            println!(
                "  {:>2}. {:>5} ({:>5.1}%)  {}",
                i + 1,
                pattern.count,
                pattern.percentage,
                pattern.label
            );
        }
    }
    println!("{}", "=".repeat(80));
}
