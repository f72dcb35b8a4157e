//! Thread block body: declared state and stack frames.

use crate::utils::config::{STATE_LINE_PREFIX, UNKNOWN_STATE};

/// State and frames extracted from the lines following a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadBody {
    pub state: String,
    pub stack_frames: Vec<String>,
}

/// Parse the body lines of a thread block
///
/// **Public** - used by the dump parser for everything after the header
///
/// The first `java.lang.Thread.State:` line decides the state; later ones are
/// ignored. Lines starting with `at ` or `- ` (after trimming) are frames,
/// kept in order. Everything else is skipped.
pub fn parse_body<'a>(lines: impl IntoIterator<Item = &'a str>) -> ThreadBody {
    let mut state: Option<String> = None;
    let mut stack_frames = Vec::new();

    for line in lines {
        let line = line.trim();

        if let Some(declared) = line.strip_prefix(STATE_LINE_PREFIX) {
            if state.is_none() {
                state = Some(declared.trim().to_string());
            }
        } else if line.starts_with("at ") || line.starts_with("- ") {
            stack_frames.push(line.to_string());
        }
    }

    let state = state
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_STATE.to_string());

    ThreadBody {
        state,
        stack_frames,
    }
}
