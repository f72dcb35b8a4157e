use jstack_analyzer::parser::{parse_dump, parse_dump_file, parse_header, split_thread_blocks};
use jstack_analyzer::utils::AnalyzeError;
use pretty_assertions::assert_eq;

const SCENARIO_A: &str = "\"Thread-1\" #10 prio=5 os_prio=0 tid=0x01 nid=0x02 runnable\n   java.lang.Thread.State: RUNNABLE\n\tat com.example.Foo.bar(Foo.java:10)";

fn fixture() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dump.txt"))
        .unwrap()
}

#[test]
fn test_single_runnable_thread() {
    let snapshot = parse_dump(SCENARIO_A);

    assert_eq!(snapshot.threads.len(), 1);
    let thread = &snapshot.threads[0];
    assert_eq!(thread.name, "Thread-1");
    assert_eq!(thread.thread_id, 10);
    assert!(!thread.daemon);
    assert_eq!(thread.priority, 5);
    assert_eq!(thread.os_priority, 0);
    assert_eq!(thread.tid, "0x01");
    assert_eq!(thread.nid, "0x02");
    assert_eq!(thread.state, "RUNNABLE");
    assert_eq!(thread.stack_frames, vec!["at com.example.Foo.bar(Foo.java:10)"]);
}

#[test]
fn test_daemon_keyword_only_changes_daemon_flag() {
    let plain = parse_dump(SCENARIO_A);
    let daemon = parse_dump(&SCENARIO_A.replacen("#10", "#10 daemon", 1));

    assert_eq!(daemon.threads.len(), 1);
    assert!(daemon.threads[0].daemon);

    let mut expected = plain.threads[0].clone();
    expected.daemon = true;
    assert_eq!(daemon.threads[0], expected);
}

#[test]
fn test_malformed_header_drops_only_its_block() {
    let content = format!(
        "{}\n\"no-nid\" #11 prio=5 os_prio=0 tid=0x03 runnable\n   java.lang.Thread.State: RUNNABLE\n\tat x.y(Z.java:1)\n\"Thread-2\" #12 prio=5 os_prio=0 tid=0x05 nid=0x06 runnable\n",
        SCENARIO_A
    );
    let snapshot = parse_dump(&content);

    let names: Vec<&str> = snapshot.threads.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Thread-1", "Thread-2"]);
    // The valid sibling keeps its own frames only
    assert_eq!(snapshot.threads[0].stack_frames.len(), 1);
    assert_eq!(snapshot.threads[1].state, "UNKNOWN");
}

#[test]
fn test_empty_dump() {
    let snapshot = parse_dump("2024-01-01 00:00:00\nFull thread dump Java HotSpot(TM):\n");

    assert!(snapshot.is_empty());
    assert_eq!(snapshot.timestamp.as_deref(), Some("2024-01-01 00:00:00"));
    assert!(snapshot.runtime_header.is_some());
}

#[test]
fn test_fixture_dump() {
    let snapshot = parse_dump(&fixture());

    assert_eq!(snapshot.timestamp.as_deref(), Some("2024-03-05 14:22:01"));
    assert_eq!(
        snapshot.runtime_header.as_deref(),
        Some("Full thread dump OpenJDK 64-Bit Server VM (25.372-b07 mixed mode):")
    );

    // "broken thread" has no nid; the VM threads have no thread id
    let names: Vec<&str> = snapshot.threads.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Attach Listener",
            "pool-1-thread-2",
            "pool-1-thread-1",
            "http-worker",
            "Finalizer",
            "Reference Handler",
            "main",
        ]
    );

    let attach = &snapshot.threads[0];
    assert!(attach.daemon);
    assert_eq!(attach.priority, 9);
    assert_eq!(attach.stack_frames, vec!["- None"]);

    let pool = &snapshot.threads[1];
    assert_eq!(pool.state, "WAITING (parking)");
    assert_eq!(pool.nid, "0x4a04");
    assert_eq!(pool.stack_frames.len(), 4);
    assert!(pool.stack_frames[1].starts_with("- parking to wait for"));
}

#[test]
fn test_block_count_matches_headers() {
    // Ten thread headers in the fixture, three of them malformed
    assert_eq!(split_thread_blocks(&fixture()).count(), 10);
}

#[test]
fn test_parse_header_keeps_status_and_address() {
    let header = parse_header(
        r#""Finalizer" #3 daemon prio=8 os_prio=0 tid=0x00007f3c2c07e000 nid=0x49f7 in Object.wait() [0x00007f3bf5bfe000]"#,
    )
    .unwrap();

    assert_eq!(header.status, "in Object.wait()");
    assert_eq!(header.address.as_deref(), Some("0x00007f3bf5bfe000"));
}

#[test]
fn test_parse_missing_file() {
    let result = parse_dump_file("/definitely/not/a/dump.txt");
    assert!(matches!(result, Err(AnalyzeError::InputNotFound(_))));
}

#[test]
fn test_parse_dump_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dump.txt");
    let snapshot = parse_dump_file(path).unwrap();
    assert_eq!(snapshot.len(), 7);
}
