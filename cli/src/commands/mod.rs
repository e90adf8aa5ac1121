//! Subcommand implementations.
//!
//! Each command returns the process exit code; registry and scanner
//! failures are reported here rather than propagated as errors.

pub mod active;
pub mod add;
pub mod clear;
pub mod find;
pub mod kill;
pub mod list;
pub mod remove;
pub mod suggest;

use std::process::ExitCode;

/// Print a success line to stdout.
pub(crate) fn success(message: impl std::fmt::Display) {
    println!("✓ {}", message);
}

/// Print a failure line to stderr and return the failing exit code.
pub(crate) fn failure(message: impl std::fmt::Display) -> ExitCode {
    eprintln!("✗ {}", message);
    ExitCode::FAILURE
}

/// Print a validation error to stderr and return the failing exit code.
pub(crate) fn invalid(error: impl std::fmt::Display) -> ExitCode {
    eprintln!("Error: {}", error);
    ExitCode::FAILURE
}

/// Shorten `s` to at most `max` characters, marking the cut with `…`.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devport_core::DevportPaths;
    use tempfile::tempdir;

    fn test_paths() -> (DevportPaths, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        (DevportPaths::with_dir(dir.path().join(".devport")), dir)
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("node", 10), "node");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("ünïcödé", 4), "ünï…");
    }

    #[tokio::test]
    async fn test_add_exit_codes() {
        let (paths, _dir) = test_paths();

        assert_eq!(add::run(&paths, "0", "web", "").await.unwrap(), ExitCode::FAILURE);
        assert_eq!(add::run(&paths, "3000", "  ", "").await.unwrap(), ExitCode::FAILURE);
        assert_eq!(add::run(&paths, "3000", "web", "").await.unwrap(), ExitCode::SUCCESS);
        assert_eq!(add::run(&paths, "3000", "api", "").await.unwrap(), ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_remove_exit_codes() {
        let (paths, _dir) = test_paths();
        add::run(&paths, "3000", "web", "").await.unwrap();

        assert_eq!(remove::run(&paths, "70000").await.unwrap(), ExitCode::FAILURE);
        assert_eq!(remove::run(&paths, "abc").await.unwrap(), ExitCode::FAILURE);
        assert_eq!(remove::run(&paths, "3001").await.unwrap(), ExitCode::FAILURE);
        assert_eq!(remove::run(&paths, "3000").await.unwrap(), ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_find_exit_codes() {
        let (paths, _dir) = test_paths();

        assert_eq!(find::run(&paths, "70000", false).await.unwrap(), ExitCode::SUCCESS);
        assert_eq!(find::run(&paths, "3000", true).await.unwrap(), ExitCode::SUCCESS);
        assert_eq!(find::run(&paths, "abc", false).await.unwrap(), ExitCode::FAILURE);
    }

    #[tokio::test]
    async fn test_suggest_exit_codes() {
        let (paths, _dir) = test_paths();

        assert_eq!(suggest::run(&paths, "abc", false).await.unwrap(), ExitCode::FAILURE);
        assert_eq!(suggest::run(&paths, "0", false).await.unwrap(), ExitCode::FAILURE);
        assert_eq!(suggest::run(&paths, "65535", false).await.unwrap(), ExitCode::SUCCESS);
    }

    #[tokio::test]
    async fn test_clear_failure_still_succeeds() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join(".devport");
        std::fs::write(&config_dir, "not a directory").unwrap();
        let paths = DevportPaths::with_dir(&config_dir);

        assert_eq!(clear::run(&paths).await.unwrap(), ExitCode::SUCCESS);
        assert!(config_dir.is_file());
    }
}
