//! Error types for the planner library.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Error type for plan storage and planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PlannerError {
    /// Creates a database error with a message and its source.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a failed `spawn_blocking` join.
    pub(crate) fn join(source: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {source}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message, e))
    }
}

/// Failures of a single call to the external completion service.
///
/// None of these ever reach the caller of the orchestrator; they select the
/// deterministic fallback and are logged.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No credential was configured for the service
    #[error("Completion service credential is not configured")]
    MissingCredential,
    /// The service did not answer within the bounded wait
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
    /// The service answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },
    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    /// The completion envelope did not carry any reply text
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = PlannerError::invalid_input("goal_text", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'goal_text': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query plan").unwrap_err();
        assert!(matches!(err, PlannerError::Database { .. }));
        assert!(err.to_string().contains("Failed to query plan"));
    }

    #[test]
    fn test_service_error_display() {
        let err = ServiceError::Status {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: overloaded");
        assert_eq!(
            ServiceError::Timeout(Duration::from_secs(15)).to_string(),
            "Timeout after 15s"
        );
    }
}
