//! Input validation for the command-line boundary.
//!
//! The registry trusts its callers: range checks and project-name checks
//! happen here, before any registry operation runs.

use crate::error::{Error, Result};

/// Parse a port that is about to be registered or used as a scan target.
///
/// Accepts integers in `1..=65535`.
pub fn parse_port(input: &str) -> Result<u16> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::Validation("Port must be a number between 1 and 65535".to_string()))?;

    match u16::try_from(value) {
        Ok(port) if port >= 1 => Ok(port),
        _ => Err(Error::Validation(
            "Port must be a number between 1 and 65535".to_string(),
        )),
    }
}

/// Parse a port used only for lookup (`find`, `remove`).
///
/// Any integer is accepted; values outside the port range can never be
/// registered, so they map to `None`.
pub fn parse_lookup_port(input: &str) -> Result<Option<u16>> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::Validation("Port must be a number".to_string()))?;

    Ok(u16::try_from(value).ok())
}

/// Reject blank project names.
pub fn validate_project(project: &str) -> Result<&str> {
    if project.trim().is_empty() {
        return Err(Error::Validation(
            "Project name must not be empty".to_string(),
        ));
    }
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port(" 1 ").unwrap(), 1);
        assert_eq!(parse_port("65535").unwrap(), 65535);

        assert!(matches!(parse_port("0"), Err(Error::Validation(_))));
        assert!(matches!(parse_port("65536"), Err(Error::Validation(_))));
        assert!(matches!(parse_port("-1"), Err(Error::Validation(_))));
        assert!(matches!(parse_port("abc"), Err(Error::Validation(_))));
        assert!(matches!(parse_port(""), Err(Error::Validation(_))));
    }

    #[test]
    fn test_parse_lookup_port() {
        assert_eq!(parse_lookup_port("8080").unwrap(), Some(8080));
        assert_eq!(parse_lookup_port("70000").unwrap(), None);
        assert_eq!(parse_lookup_port("-5").unwrap(), None);
        assert!(parse_lookup_port("http").is_err());
    }

    #[test]
    fn test_validate_project() {
        assert_eq!(validate_project("web").unwrap(), "web");
        assert!(validate_project("").is_err());
        assert!(validate_project("   ").is_err());
    }
}
