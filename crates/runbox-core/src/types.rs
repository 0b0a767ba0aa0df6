//! Request, result, and wire types shared across all runbox surfaces
//!
//! The `Execution*` pair is runbox's own contract: constructed fresh per run and
//! consumed once by the display layer, never persisted. The remaining types
//! mirror the Piston service's JSON shapes exactly; optional fields stay
//! optional so a partial response from the service still deserializes.

use serde::{Deserialize, Serialize};

/// A single user-initiated run: which language, what source, optional stdin.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutionRequest {
    pub language: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
}

impl ExecutionRequest {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            code: code.into(),
            input: None,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }
}

/// The normalized outcome of a run, success or failure alike.
///
/// Failures never escape the execution boundary as errors; they arrive here
/// with an empty `output` and a populated `error`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock runtime in milliseconds, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<u64>,
    /// Peak memory usage in bytes, when the service reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
}

/// One source file in the execute payload. Piston accepts several; runbox
/// always sends exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

/// Body of `POST {base}/execute`, field names per the Piston v2 API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExecutePayload {
    pub language: String,
    pub version: String,
    pub files: Vec<SourceFile>,
    pub stdin: String,
    pub args: Vec<String>,
    pub compile_timeout: i64,
    pub run_timeout: i64,
    pub compile_memory_limit: i64,
    pub run_memory_limit: i64,
}

/// stdout/stderr of one remote phase, plus run-phase statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PhaseOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<u64>,
}

/// Response of `POST {base}/execute`. Languages without a compile phase omit
/// the `compile` section entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ExecuteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compile: Option<PhaseOutput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run: Option<PhaseOutput>,
}

/// One entry of `GET {base}/runtimes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeDescriptor {
    pub language: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
}
