//! Parser for `lsof` socket listings.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::ActiveSocketEntry;

use super::utils::{decode_escaped, parse_address};

/// Matches the trailing `NAME` column of a listening socket, e.g.
/// `TCP [::1]:3000 (LISTEN)`.
fn listen_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?P<descriptor>TCP\s+(?P<address>\S+:\d+)\s+\(LISTEN\))\s*$")
            .expect("listen regex is valid")
    })
}

/// Parse `lsof -iTCP -sTCP:LISTEN -P -n` output into socket entries.
///
/// Expected lsof output format:
/// ```text
/// COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
/// node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
/// ```
///
/// Lines that are not in a listening state or do not have the expected
/// column shape are skipped. Duplicate (port, pid) pairs are collapsed and
/// the result is sorted by port.
pub fn parse_lsof_listen(output: &str) -> Vec<ActiveSocketEntry> {
    let regex = listen_name_regex();
    let mut entries = Vec::new();
    let mut seen: HashSet<(u16, u32)> = HashSet::new();

    for line in output.lines() {
        // COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME (STATE)
        let components: Vec<&str> = line.split_whitespace().collect();
        if components.len() < 10 {
            continue;
        }

        let Some(caps) = regex.captures(line) else {
            continue;
        };

        let pid: u32 = match components[1].parse() {
            Ok(p) => p,
            Err(_) => continue,
        };

        let Some((address, port)) = parse_address(&caps["address"]) else {
            continue;
        };

        if !seen.insert((port, pid)) {
            continue;
        }

        let descriptor = caps["descriptor"].split_whitespace().collect::<Vec<_>>().join(" ");

        entries.push(ActiveSocketEntry::new(
            port,
            pid,
            decode_escaped(components[0]),
            descriptor,
            address,
        ));
    }

    entries.sort_by_key(|e| (e.port, e.pid));
    entries
}

/// Parse `lsof -t` output (one PID per line) into unique PIDs.
pub fn parse_pid_list(output: &str) -> Vec<u32> {
    let mut pids: Vec<u32> = output
        .lines()
        .filter_map(|line| line.trim().parse().ok())
        .collect();
    pids.sort_unstable();
    pids.dedup();
    pids
}

#[cfg(test)]
mod tests {
    use super::*;

    const DARWIN_SAMPLE: &str = r#"COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
nginx        1  root    6u  IPv4 0x1234567890abcdef      0t0  TCP *:80 (LISTEN)
"#;

    const LINUX_SAMPLE: &str = r#"COMMAND     PID USER   FD   TYPE  DEVICE SIZE/OFF NODE NAME
postgres    812 pg      5u  IPv4   21843      0t0  TCP 127.0.0.1:5432 (LISTEN)
node       4411 dev    21u  IPv6  998877      0t0  TCP *:5173 (LISTEN)
"#;

    #[test]
    fn test_parse_lsof_output() {
        let entries = parse_lsof_listen(DARWIN_SAMPLE);
        assert_eq!(entries.len(), 2);

        // Should be sorted by port
        assert_eq!(entries[0].port, 80);
        assert_eq!(entries[0].process_name, "nginx");
        assert_eq!(entries[0].pid, 1);
        assert_eq!(entries[0].address, "*");
        assert_eq!(entries[0].command, "TCP *:80 (LISTEN)");

        assert_eq!(entries[1].port, 3000);
        assert_eq!(entries[1].process_name, "node");
        assert_eq!(entries[1].address, "[::1]");
    }

    #[test]
    fn test_parse_linux_output() {
        let entries = parse_lsof_listen(LINUX_SAMPLE);
        let ports: Vec<u16> = entries.iter().map(|e| e.port).collect();
        assert_eq!(ports, vec![5173, 5432]);
        assert_eq!(entries[0].process_name, "node");
        assert_eq!(entries[1].address, "127.0.0.1");
    }

    #[test]
    fn test_unescape_process_name() {
        let output = r#"COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
Code\x20Helper  1234  user   10u  IPv4 0x1234567890abcdef      0t0  TCP *:3000 (LISTEN)
"#;

        let entries = parse_lsof_listen(output);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].process_name, "Code Helper");
    }

    #[test]
    fn test_deduplication() {
        // Same port and PID should be deduplicated
        let output = r#"COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
node     1234  code   19u  IPv4 0x1234567890abcdef      0t0  TCP 127.0.0.1:3000 (LISTEN)
node     1234  code   20u  IPv6 0xfedcba0987654321      0t0  TCP [::1]:3000 (LISTEN)
"#;

        let entries = parse_lsof_listen(output);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_skips_malformed_and_non_listening_lines() {
        let output = r#"COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
garbage line
node     abc  code   19u  IPv4 0x1234567890abcdef      0t0  TCP *:3000 (LISTEN)
curl     999  code   5u   IPv4 0x1234567890abcdef      0t0  TCP 127.0.0.1:50000->127.0.0.1:3000 (ESTABLISHED)
ruby     777  code   9u   IPv4 0x1234567890abcdef      0t0  TCP *:4000 (LISTEN)
"#;

        let entries = parse_lsof_listen(output);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].port, 4000);
        assert_eq!(entries[0].pid, 777);
    }

    #[test]
    fn test_empty_output() {
        assert!(parse_lsof_listen("").is_empty());
    }

    #[test]
    fn test_parse_pid_list() {
        assert_eq!(parse_pid_list("4411\n812\n4411\n"), vec![812, 4411]);
        assert!(parse_pid_list("").is_empty());
        assert_eq!(parse_pid_list("12\nnot-a-pid\n"), vec![12]);
    }
}
