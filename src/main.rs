//! JStack Analyzer CLI
//!
//! Analyzes jstack thread dumps and generates themed HTML reports
//! with thread state, family and stack pattern statistics.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use jstack_analyzer::commands::{execute_analyze, list_themes, validate_args, AnalyzeArgs};
use jstack_analyzer::output::Theme;
use jstack_analyzer::utils::config::DEFAULT_OUTPUT_FILE;

/// JStack Analyzer - Thread dump forensics for the JVM
#[derive(Parser, Debug)]
#[command(name = "jstack-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to jstack output file
    #[arg(required_unless_present = "list_themes")]
    input_file: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Design theme for the report
    #[arg(short, long, value_enum, default_value_t = Theme::Minimal)]
    theme: Theme,

    /// List available themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Also write the analysis as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if cli.list_themes {
        list_themes();
        return Ok(());
    }

    let Some(input) = cli.input_file else {
        anyhow::bail!("No input file given");
    };

    let args = AnalyzeArgs {
        input,
        output_html: cli.output,
        output_json: cli.json,
        theme: cli.theme,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    let outcome = execute_analyze(&args)?;

    println!(
        "Analysis complete! HTML report generated: {}",
        outcome.html_path.display()
    );
    if let Some(json_path) = &outcome.json_path {
        println!("JSON report: {}", json_path.display());
    }
    println!("Theme: {}", args.theme);
    println!("Analyzed {} threads", outcome.thread_count);

    Ok(())
}
