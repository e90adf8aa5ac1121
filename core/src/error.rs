//! Error types for the devport-core library.

use thiserror::Error;

/// Result type alias for devport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing the registry or the socket table.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed user input (port number, project name).
    #[error("{0}")]
    Validation(String),

    /// The port already has a registry record.
    #[error("Port {port} is already used by \"{project}\"")]
    AlreadyRegistered { port: u16, project: String },

    /// The port has no registry record.
    #[error("Port {0} is not registered")]
    NotRegistered(u16),

    /// No process is listening on the port.
    #[error("No process found on port {0}")]
    NotFound(u16),

    /// Failed to read or write the registry file.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Failed to invoke or read the socket listing utility.
    #[error("Scan failed: {0}")]
    Scan(String),

    /// Failed to kill a process.
    #[error("Failed to kill process {pid}: {reason}")]
    KillFailed { pid: u32, reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::AlreadyRegistered {
            port: 3000,
            project: "web".to_string(),
        };
        assert_eq!(err.to_string(), "Port 3000 is already used by \"web\"");

        assert_eq!(
            Error::NotRegistered(8080).to_string(),
            "Port 8080 is not registered"
        );
        assert!(Error::NotFound(5432).to_string().contains("5432"));
    }
}
