//! Error types for the execution boundary
//!
//! Four failure modes exist: transport failure, a non-success HTTP status, a
//! malformed response body, and invalid configuration. All of them are
//! normalized into an error-shaped `ExecutionResult` at the outermost call
//! boundary; nothing propagates past it to a display surface.

use thiserror::Error;

use crate::types::ExecutionResult;

#[derive(Error, Debug, Clone)]
pub enum ExecutionError {
    #[error("HTTP error! status: {0}")]
    Http(u16),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExecutionError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl ExecutionResult {
    /// Normalize a failure into the result shape the display layer consumes:
    /// empty output, populated error, no statistics.
    pub fn from_failure(err: &ExecutionError) -> Self {
        Self {
            output: String::new(),
            error: Some(format!("Execution failed: {}", err)),
            execution_time: None,
            memory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_failure_result_carries_status_code() {
        let result = ExecutionResult::from_failure(&ExecutionError::Http(503));
        assert!(result.output.is_empty());
        let error = result.error.unwrap();
        assert!(error.contains("503"), "missing status code in: {}", error);
        assert!(error.starts_with("Execution failed:"));
    }

    #[test]
    fn transport_failure_result_describes_cause() {
        let result =
            ExecutionResult::from_failure(&ExecutionError::transport("connection refused"));
        assert!(result.error.unwrap().contains("connection refused"));
        assert!(result.execution_time.is_none());
    }
}
