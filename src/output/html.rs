//! HTML report renderer and writer.
//!
//! Renders a `Report` into a single self-contained HTML page. All text taken
//! from the dump is escaped before it is embedded.

use super::report::Report;
use super::theme::Theme;
use crate::aggregator::{AlertLevel, StateCategory};
use crate::utils::config::{MAX_NAME_DISPLAY, MAX_PATTERN_DISPLAY, STACK_PREVIEW_FRAMES};
use crate::utils::error::OutputError;
use chrono::Local;
use log::{debug, info};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render a report as an HTML page
///
/// **Public** - main entry point for HTML rendering
///
/// # Arguments
/// * `report` - Report built from the analyzed dump
/// * `theme` - Color theme for the page
pub fn render_html(report: &Report, theme: Theme) -> String {
    let mut html = String::with_capacity(32 * 1024);

    render_head(&mut html, theme);
    render_header(&mut html, report, theme);
    render_stat_cards(&mut html, report);
    render_state_distribution(&mut html, report);
    render_families(&mut html, report);
    render_alerts(&mut html, report);
    render_thread_details(&mut html, report);
    render_stack_patterns(&mut html, report);
    render_analysis_summary(&mut html, report);

    html.push_str("    </div>\n</body>\n</html>\n");

    debug!("Rendered HTML report ({} bytes)", html.len());
    html
}

/// Write rendered HTML to a file
///
/// **Public** - creates parent directories when missing
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
pub fn write_html(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing HTML report to: {}", output_path.display());

    super::validate_path(output_path)?;
    super::ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(html.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "HTML report written successfully ({} bytes, {:.2} KB)",
        html.len(),
        html.len() as f64 / 1024.0
    );

    Ok(())
}

/// Escape text for HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Cut `text` to at most `max_chars` characters, appending "..." when cut
pub fn truncate_display(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn render_head(html: &mut String, theme: Theme) {
    let p = theme.palette();

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>JStack Analysis Report | Thread Forensics</title>
    <style>
        :root {{
            --primary: {primary};
            --secondary: {secondary};
            --accent: {accent};
            --success: {success};
            --warning: {warning};
            --danger: {danger};
            --dark: {dark};
            --light: {light};
            --neutral: {neutral};
            --gradient-primary: {gradient_primary};
            --gradient-secondary: {gradient_secondary};
        }}
        * {{ box-sizing: border-box; }}
        body {{
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f7fa;
            color: #2c3e50;
            line-height: 1.6;
            font-size: 14px;
        }}
        .container {{
            max-width: 1200px;
            margin: 0 auto;
            padding: 30px;
            background: #ffffff;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
        }}
        .header {{ text-align: center; margin-bottom: 40px; border-bottom: 1px solid #e1e4e8; }}
        .header h1 {{ font-size: 28px; margin: 0; color: var(--dark); }}
        .theme-info {{ font-style: italic; color: var(--neutral); font-size: 13px; }}
        .stats-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }}
        .stat-card {{ background: var(--light); border-top: 4px solid var(--primary); border-radius: 8px; padding: 20px; }}
        .stat-card h3 {{ margin: 0; font-size: 13px; color: var(--secondary); text-transform: uppercase; }}
        .stat-card .value {{ font-size: 32px; font-weight: 700; color: var(--primary); }}
        .section {{ margin-bottom: 40px; }}
        .section h2 {{ border-bottom: 2px solid var(--accent); padding-bottom: 8px; color: var(--dark); }}
        .chart-item {{ margin: 15px 0; display: flex; align-items: center; gap: 15px; }}
        .chart-label {{ min-width: 150px; font-weight: 600; font-size: 12px; }}
        .chart-bar-wrapper {{ flex: 1; max-width: 400px; }}
        .chart-value {{ min-width: 100px; text-align: right; font-family: 'JetBrains Mono', monospace; color: var(--primary); font-size: 12px; }}
        .progress-bar {{ background: #e5e7eb; border-radius: 4px; height: 12px; overflow: hidden; }}
        .progress-fill {{ background: var(--gradient-primary); height: 100%; }}
        .thread-table {{ width: 100%; border-collapse: collapse; font-size: 13px; }}
        .thread-table th {{ background: var(--gradient-secondary); color: #ffffff; text-align: left; padding: 10px; }}
        .thread-table td {{ border-bottom: 1px solid #e1e4e8; padding: 8px 10px; vertical-align: top; }}
        .stack-trace {{ font-family: 'JetBrains Mono', monospace; font-size: 11px; color: var(--secondary); }}
        .state-badge {{ padding: 2px 8px; border-radius: 10px; font-size: 11px; font-weight: 600; color: #ffffff; }}
        .state-runnable {{ background: var(--success); }}
        .state-waiting {{ background: var(--warning); }}
        .state-timed_waiting {{ background: var(--accent); }}
        .state-blocked {{ background: var(--danger); }}
        .state-other {{ background: var(--neutral); }}
        .daemon {{ color: var(--accent); font-weight: 600; }}
        .alert {{ padding: 15px 20px; border-radius: 8px; margin: 20px 0; border-left: 4px solid; }}
        .alert-warning {{ background: #fffbeb; border-color: var(--warning); }}
        .alert-danger {{ background: #fef2f2; border-color: var(--danger); }}
        .alert-info {{ background: #eff6ff; border-color: var(--primary); }}
        .note {{ color: var(--neutral); font-style: italic; opacity: 0.8; }}
    </style>
</head>
<body>
    <div class="container">
"#,
        primary = p.primary,
        secondary = p.secondary,
        accent = p.accent,
        success = p.success,
        warning = p.warning,
        danger = p.danger,
        dark = p.dark,
        light = p.light,
        neutral = p.neutral,
        gradient_primary = p.gradient_primary,
        gradient_secondary = p.gradient_secondary,
    );
}

fn render_header(html: &mut String, report: &Report, theme: Theme) {
    let _ = write!(
        html,
        r#"        <div class="header">
            <h1>JStack Analysis Report</h1>
            <div class="theme-info">{}</div>
            <p><strong>Generated:</strong> {}</p>
"#,
        escape_html(theme.description()),
        Local::now().format("%Y-%m-%d %H:%M:%S"),
    );

    if let Some(timestamp) = &report.timestamp {
        let _ = writeln!(
            html,
            "            <p><strong>Original Timestamp:</strong> {}</p>",
            escape_html(timestamp)
        );
    }
    if let Some(banner) = &report.runtime_header {
        let _ = writeln!(
            html,
            "            <p><strong>JVM Info:</strong> {}</p>",
            escape_html(banner)
        );
    }

    html.push_str("        </div>\n");
}

fn render_stat_cards(html: &mut String, report: &Report) {
    let summary = &report.summary;
    let cards = [
        ("Total Threads", summary.total),
        ("Daemon Threads", summary.daemon),
        ("Non-Daemon Threads", summary.non_daemon),
        ("Blocked Threads", summary.blocked),
    ];

    html.push_str("        <div class=\"stats-grid\">\n");
    for (title, value) in cards {
        let _ = write!(
            html,
            r#"            <div class="stat-card">
                <h3>{}</h3>
                <div class="value">{}</div>
            </div>
"#,
            title, value
        );
    }
    html.push_str("        </div>\n");
}

fn render_state_distribution(html: &mut String, report: &Report) {
    html.push_str(
        "        <div class=\"section\">\n            <h2>Thread State Distribution</h2>\n",
    );

    for state in &report.states {
        let _ = write!(
            html,
            r#"            <div class="chart-item">
                <div class="chart-label"><span class="state-badge {}">{}</span></div>
                <div class="chart-bar-wrapper">
                    <div class="progress-bar"><div class="progress-fill" style="width: {:.1}%;"></div></div>
                </div>
                <div class="chart-value">{} ({:.1}%)</div>
            </div>
"#,
            StateCategory::classify(&state.label).css_class(),
            escape_html(&state.label),
            state.percentage,
            state.count,
            state.percentage
        );
    }

    html.push_str("        </div>\n");
}

fn render_families(html: &mut String, report: &Report) {
    html.push_str(
        r#"        <div class="section">
            <h2>Thread Groups</h2>
            <table class="thread-table">
                <thead><tr><th>Thread Group</th><th>Count</th><th>Percentage</th></tr></thead>
                <tbody>
"#,
    );

    for family in &report.families {
        let _ = writeln!(
            html,
            "                    <tr><td>{}</td><td>{}</td><td>{:.1}%</td></tr>",
            escape_html(&family.label),
            family.count,
            family.percentage
        );
    }

    html.push_str("                </tbody>\n            </table>\n        </div>\n");
}

fn render_alerts(html: &mut String, report: &Report) {
    let level = report.summary.blocked_alert;

    if level >= AlertLevel::Warning {
        let _ = write!(
            html,
            r#"        <div class="alert alert-warning">
            <strong>Warning:</strong> Found {} blocked threads that may indicate contention issues.
        </div>
"#,
            report.summary.blocked
        );
    }

    if level == AlertLevel::Critical {
        html.push_str(
            r#"        <div class="alert alert-danger">
            <strong>Critical:</strong> High percentage of blocked threads detected! This may indicate serious performance issues.
        </div>
"#,
        );
    }
}

fn render_thread_details(html: &mut String, report: &Report) {
    html.push_str(
        r#"        <div class="section">
            <h2>Detailed Thread Information</h2>
            <p class="note">Note: Only showing one representative thread per unique name pattern (regardless of state) to reduce duplication.</p>
            <table class="thread-table">
                <thead><tr><th>Thread Name</th><th>ID</th><th>State</th><th>Daemon</th><th>Priority</th><th>Stack Trace (Top 3)</th></tr></thead>
                <tbody>
"#,
    );

    let mut threads: Vec<_> = report.threads.iter().collect();
    threads.sort_by(|a, b| a.name.cmp(&b.name));

    for thread in threads {
        let stack_preview = if thread.stack_frames.is_empty() {
            "No stack trace available".to_string()
        } else {
            thread
                .stack_frames
                .iter()
                .take(STACK_PREVIEW_FRAMES)
                .map(|frame| escape_html(frame))
                .collect::<Vec<_>>()
                .join("<br>")
        };

        let _ = write!(
            html,
            r#"                    <tr>
                        <td title="{}">{}</td>
                        <td>{}</td>
                        <td><span class="state-badge {}">{}</span></td>
                        <td class="{}">{}</td>
                        <td>{}</td>
                        <td><div class="stack-trace">{}</div></td>
                    </tr>
"#,
            escape_html(&thread.name),
            escape_html(&truncate_display(&thread.name, MAX_NAME_DISPLAY)),
            thread.thread_id,
            StateCategory::classify(&thread.state).css_class(),
            escape_html(&thread.state),
            if thread.daemon { "daemon" } else { "" },
            if thread.daemon { "Yes" } else { "No" },
            thread.priority,
            stack_preview
        );
    }

    html.push_str("                </tbody>\n            </table>\n        </div>\n");
}

fn render_stack_patterns(html: &mut String, report: &Report) {
    html.push_str(
        r#"        <div class="section">
            <h2>Common Stack Trace Patterns</h2>
            <table class="thread-table">
                <thead><tr><th>Stack Trace Pattern</th><th>Count</th><th>Percentage</th></tr></thead>
                <tbody>
"#,
    );

    for pattern in &report.stack_patterns {
        let _ = writeln!(
            html,
            "                    <tr><td><code>{}</code></td><td>{}</td><td>{:.1}%</td></tr>",
            escape_html(&truncate_display(&pattern.label, MAX_PATTERN_DISPLAY)),
            pattern.count,
            pattern.percentage
        );
    }

    html.push_str("                </tbody>\n            </table>\n        </div>\n");
}

fn render_analysis_summary(html: &mut String, report: &Report) {
    let summary = &report.summary;
    let most_common_state = summary.most_common_state.as_deref().unwrap_or("N/A");
    let largest_family = summary.largest_family.as_deref().unwrap_or("N/A");

    let _ = write!(
        html,
        r#"        <div class="section">
            <h2>Analysis Summary</h2>
            <div class="alert alert-info">
                <h3>Key Findings:</h3>
                <ul>
                    <li>Total of {} threads ({} daemon, {} non-daemon)</li>
                    <li>{} threads are currently RUNNABLE</li>
                    <li>{} threads are in WAITING or TIMED_WAITING state</li>
                    <li>{} threads are BLOCKED</li>
                    <li>Most common thread state: {}</li>
                    <li>Largest thread group: {}</li>
                </ul>
            </div>
        </div>
"#,
        summary.total,
        summary.daemon,
        summary.non_daemon,
        summary.runnable,
        summary.waiting,
        summary.blocked,
        escape_html(most_common_state),
        escape_html(largest_family)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_truncate_display() {
        assert_eq!(truncate_display("short", 10), "short");
        assert_eq!(truncate_display("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_display("abcdefghijk", 10), "abcdefghij...");
        // Multi-byte characters are counted as characters, not bytes
        assert_eq!(truncate_display("ééé", 2), "éé...");
    }
}
