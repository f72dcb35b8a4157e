//! Report model and output writers.
//!
//! This module handles:
//! - Building the serializable report from statistics
//! - HTML rendering with selectable themes
//! - JSON export and read-back

pub mod html;
pub mod json;
pub mod report;
pub mod theme;

// Re-export main functions
pub use html::{render_html, write_html};
pub use json::{read_report, report_to_string, write_report};
pub use report::{build_report, Report};
pub use theme::Theme;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create the parent directory of an output file if it does not exist
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
