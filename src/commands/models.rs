use crate::output::Theme;
use crate::utils::config::DEFAULT_OUTPUT_FILE;
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Thread dump to analyze
    pub input: PathBuf,

    /// Output path for the HTML report
    pub output_html: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Report theme
    pub theme: Theme,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output_html: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output_json: None,
            theme: Theme::default(),
            print_summary: false,
        }
    }
}

/// What a finished analysis produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOutcome {
    pub thread_count: usize,
    pub html_path: PathBuf,
    pub json_path: Option<PathBuf>,
}
