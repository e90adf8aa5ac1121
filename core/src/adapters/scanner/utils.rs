/// Parse an address:port string.
///
/// Handles multiple address formats:
/// - IPv4: "127.0.0.1:3000" or "*:8080"
/// - IPv6: "\[::1]:3000" or "\[fe80::1]:8080"
pub(crate) fn parse_address(address: &str) -> Option<(String, u16)> {
    if address.starts_with('[') {
        let bracket_end = address.find(']')?;
        let port_str = address[bracket_end + 1..].strip_prefix(':')?;
        let port: u16 = port_str.parse().ok()?;
        Some((address[..=bracket_end].to_string(), port))
    } else {
        let (addr, port_str) = address.rsplit_once(':')?;
        let port: u16 = port_str.parse().ok()?;
        let addr = if addr.is_empty() { "*" } else { addr };
        Some((addr.to_string(), port))
    }
}

/// Decode `\xNN` escapes that lsof uses for unprintable bytes in process
/// names (e.g. `Code\x20Helper`).
pub(crate) fn decode_escaped(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(idx) = rest.find("\\x") {
        result.push_str(&rest[..idx]);
        let after = &rest[idx + 2..];
        let decoded = after
            .get(..2)
            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());

        match decoded {
            Some(byte) => {
                result.push(byte as char);
                rest = &after[2..];
            }
            None => {
                result.push_str("\\x");
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4_address() {
        let (addr, port) = parse_address("127.0.0.1:3000").unwrap();
        assert_eq!(addr, "127.0.0.1");
        assert_eq!(port, 3000);

        let (addr, port) = parse_address("*:8080").unwrap();
        assert_eq!(addr, "*");
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_ipv6_address() {
        let (addr, port) = parse_address("[::1]:3000").unwrap();
        assert_eq!(addr, "[::1]");
        assert_eq!(port, 3000);

        let (addr, port) = parse_address("[fe80::1]:8080").unwrap();
        assert_eq!(addr, "[fe80::1]");
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_invalid_address() {
        assert!(parse_address("localhost").is_none());
        assert!(parse_address("*:http").is_none());
        assert!(parse_address("[::1]").is_none());
        assert!(parse_address("*:70000").is_none());
    }

    #[test]
    fn test_decode_escaped() {
        assert_eq!(decode_escaped("Code\\x20Helper"), "Code Helper");
        assert_eq!(decode_escaped("a\\x2fb"), "a/b");
        assert_eq!(decode_escaped("plain"), "plain");
        assert_eq!(decode_escaped("bad\\xZZ"), "bad\\xZZ");
    }
}
