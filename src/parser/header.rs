//! Thread header line grammar.
//!
//! A header looks like:
//!
//! ```text
//! "pool-1-thread-1" #12 daemon prio=5 os_prio=0 tid=0x00007f3c2c0a1000 nid=0x4a03 waiting on condition [0x00007f3bf4dfe000]
//! ```
//!
//! Field order is fixed. Only the `daemon` keyword and the trailing bracketed
//! address are optional; anything else missing or malformed rejects the line.

use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^"(?P<name>[^"]+)"\s+"#,
        r"#(?P<id>\d+)\s+",
        r"(?P<daemon>daemon\s+)?",
        r"prio=(?P<prio>\d+)\s+",
        r"os_prio=(?P<os_prio>\d+)\s+",
        r"tid=(?P<tid>0x[0-9a-f]+)\s+",
        r"nid=(?P<nid>0x[0-9a-f]+)\s+",
        r"(?P<status>.+?)",
        r"(?:\s+\[(?P<address>0x[0-9a-f]+)\])?$",
    ))
    .expect("header pattern is valid")
});

/// Fields of a successfully parsed header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadHeader {
    pub name: String,
    pub thread_id: u64,
    pub daemon: bool,
    pub priority: u32,
    pub os_priority: u32,
    pub tid: String,
    pub nid: String,

    /// Free-text status such as "waiting on condition"
    pub status: String,

    /// Last known Java stack pointer, when printed
    pub address: Option<String>,
}

/// Parse a thread header line
///
/// **Public** - used by the dump parser for the first line of each block
///
/// # Returns
/// `None` when the line does not follow the header grammar, including
/// numeric fields too large for their type.
pub fn parse_header(line: &str) -> Option<ThreadHeader> {
    let line = line.trim();
    let Some(caps) = HEADER_PATTERN.captures(line) else {
        debug!("Rejected thread header: {}", line);
        return None;
    };

    let numbers = (
        caps["id"].parse::<u64>(),
        caps["prio"].parse::<u32>(),
        caps["os_prio"].parse::<u32>(),
    );
    let (Ok(thread_id), Ok(priority), Ok(os_priority)) = numbers else {
        debug!("Rejected thread header with out-of-range numbers: {}", line);
        return None;
    };

    Some(ThreadHeader {
        name: caps["name"].to_string(),
        thread_id,
        daemon: caps.name("daemon").is_some(),
        priority,
        os_priority,
        tid: caps["tid"].to_string(),
        nid: caps["nid"].to_string(),
        status: caps["status"].to_string(),
        address: caps.name("address").map(|m| m.as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAITING_HEADER: &str = r#""pool-1-thread-1" #12 daemon prio=5 os_prio=0 tid=0x00007f3c2c0a1000 nid=0x4a03 waiting on condition [0x00007f3bf4dfe000]"#;

    #[test]
    fn test_parse_full_header() {
        let header = parse_header(WAITING_HEADER).unwrap();

        assert_eq!(header.name, "pool-1-thread-1");
        assert_eq!(header.thread_id, 12);
        assert!(header.daemon);
        assert_eq!(header.priority, 5);
        assert_eq!(header.os_priority, 0);
        assert_eq!(header.tid, "0x00007f3c2c0a1000");
        assert_eq!(header.nid, "0x4a03");
        assert_eq!(header.status, "waiting on condition");
        assert_eq!(header.address.as_deref(), Some("0x00007f3bf4dfe000"));
    }

    #[test]
    fn test_parse_header_without_address() {
        let header =
            parse_header(r#""Thread-1" #10 prio=5 os_prio=0 tid=0x01 nid=0x02 runnable"#).unwrap();

        assert!(!header.daemon);
        assert_eq!(header.status, "runnable");
        assert!(header.address.is_none());
    }

    #[test]
    fn test_name_with_spaces_and_symbols() {
        let header = parse_header(
            r#""C2 CompilerThread0 (#1) [x]" #6 daemon prio=9 os_prio=0 tid=0x0a nid=0x0b waiting on condition"#,
        )
        .unwrap();

        assert_eq!(header.name, "C2 CompilerThread0 (#1) [x]");
    }

    #[test]
    fn test_rejects_missing_fields() {
        // no nid
        assert!(parse_header(r#""a" #1 prio=5 os_prio=0 tid=0x01 runnable"#).is_none());
        // no thread id
        assert!(parse_header(r#""a" prio=5 os_prio=0 tid=0x01 nid=0x02 runnable"#).is_none());
        // no status
        assert!(parse_header(r#""a" #1 prio=5 os_prio=0 tid=0x01 nid=0x02"#).is_none());
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(parse_header(r#""a" #1 prio=5 os_prio=0 tid=01 nid=0x02 runnable"#).is_none());
        assert!(parse_header(r#""a" #1 prio=5 os_prio=0 tid=0x01 nid=0xZZ runnable"#).is_none());
    }

    #[test]
    fn test_rejects_overflowing_numbers() {
        assert!(parse_header(
            r#""a" #99999999999999999999999 prio=5 os_prio=0 tid=0x01 nid=0x02 runnable"#
        )
        .is_none());
    }

    #[test]
    fn test_misplaced_daemon_is_rejected() {
        assert!(parse_header(r#""a" #1 prio=5 daemon os_prio=0 tid=0x01 nid=0x02 runnable"#).is_none());
    }
}
