use jstack_analyzer::commands::{execute_analyze, validate_args, AnalyzeArgs};
use jstack_analyzer::output::{read_report, Theme};
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dump.txt"))
}

#[test]
fn test_validate_args_valid() {
    let args = AnalyzeArgs {
        input: fixture_path(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_ok());
}

#[test]
fn test_validate_args_missing_input() {
    let args = AnalyzeArgs {
        input: PathBuf::from("/definitely/not/a/dump.txt"),
        ..Default::default()
    };

    let err = validate_args(&args).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_validate_args_directory_input() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        input: temp_dir.path().to_path_buf(),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_same_output_paths() {
    let args = AnalyzeArgs {
        input: fixture_path(),
        output_html: PathBuf::from("report.out"),
        output_json: Some(PathBuf::from("report.out")),
        ..Default::default()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_default_args() {
    let args = AnalyzeArgs::default();

    assert_eq!(args.output_html, PathBuf::from("jstack_report.html"));
    assert_eq!(args.theme, Theme::Minimal);
    assert!(args.output_json.is_none());
}

#[test]
fn test_execute_analyze_writes_reports() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        input: fixture_path(),
        output_html: temp_dir.path().join("report.html"),
        output_json: Some(temp_dir.path().join("report.json")),
        theme: Theme::Modern,
        print_summary: true,
    };

    let outcome = execute_analyze(&args).unwrap();

    assert_eq!(outcome.thread_count, 7);
    let html = std::fs::read_to_string(&args.output_html).unwrap();
    assert!(html.contains("Modern - Contemporary design"));

    let report = read_report(temp_dir.path().join("report.json")).unwrap();
    assert_eq!(report.summary.blocked, 1);
}

#[test]
fn test_execute_analyze_missing_input_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let args = AnalyzeArgs {
        input: temp_dir.path().join("missing.txt"),
        output_html: temp_dir.path().join("report.html"),
        ..Default::default()
    };

    assert!(execute_analyze(&args).is_err());
    assert!(!args.output_html.exists());
}

#[test]
fn test_execute_analyze_empty_dump() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("empty.txt");
    std::fs::write(&input, "Full thread dump OpenJDK\n\nJNI global references: 0\n").unwrap();

    let args = AnalyzeArgs {
        input,
        output_html: temp_dir.path().join("report.html"),
        ..Default::default()
    };

    let outcome = execute_analyze(&args).unwrap();
    assert_eq!(outcome.thread_count, 0);
    assert!(args.output_html.exists());
}
