//! Request builder: UI state to execute payload
//!
//! Maps a (language, source) pair to the service's wire payload. The language
//! identifier selects a pinned runtime version and a file name from the static
//! table, with the documented python/`main.txt` fallback for unknown
//! identifiers. Source content is forwarded verbatim; there is no validation
//! step, and the compile/run limits are fixed policy rather than caller input.

use crate::config::{RunnerConfig, MEMORY_LIMIT_UNBOUNDED};
use crate::languages::{runtime_config, source_file_name};
use crate::types::{ExecutePayload, ExecutionRequest, SourceFile};

/// Build the execute payload for one run.
pub fn build_payload(request: &ExecutionRequest, config: &RunnerConfig) -> ExecutePayload {
    let runtime = runtime_config(&request.language);

    ExecutePayload {
        language: runtime.language.to_string(),
        version: runtime.version.to_string(),
        files: vec![SourceFile {
            name: source_file_name(&request.language).to_string(),
            content: request.code.clone(),
        }],
        stdin: request.input.clone().unwrap_or_default(),
        args: Vec::new(),
        compile_timeout: config.compile_timeout_ms,
        run_timeout: config.run_timeout_ms,
        compile_memory_limit: MEMORY_LIMIT_UNBOUNDED,
        run_memory_limit: MEMORY_LIMIT_UNBOUNDED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(language: &str, code: &str) -> ExecutePayload {
        build_payload(
            &ExecutionRequest::new(language, code),
            &RunnerConfig::default(),
        )
    }

    #[test]
    fn go_payload_round_trips_through_wire_shape() {
        let payload = build("go", "package main\n\nfunc main() {}\n");
        let json = serde_json::to_string(&payload).unwrap();
        let decoded: ExecutePayload = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.language, "go");
        assert_eq!(decoded.version, "1.16.2");
        assert_eq!(decoded.files.len(), 1);
        assert_eq!(decoded.files[0].name, "main.go");
        assert_eq!(decoded.files[0].content, "package main\n\nfunc main() {}\n");
    }

    #[test]
    fn unknown_language_builds_python_payload_with_generic_file() {
        let payload = build("cobol", "DISPLAY 'HELLO'.");
        assert_eq!(payload.language, "python");
        assert_eq!(payload.version, "3.10.0");
        assert_eq!(payload.files[0].name, "main.txt");
    }

    #[test]
    fn fixed_limits_are_applied() {
        let payload = build("python", "print(1)");
        assert_eq!(payload.compile_timeout, 10_000);
        assert_eq!(payload.run_timeout, 3_000);
        assert_eq!(payload.compile_memory_limit, -1);
        assert_eq!(payload.run_memory_limit, -1);
        assert!(payload.args.is_empty());
    }

    #[test]
    fn missing_stdin_becomes_empty_string() {
        let payload = build("python", "print(input())");
        assert_eq!(payload.stdin, "");

        let with_input = build_payload(
            &ExecutionRequest::new("python", "print(input())").with_input("hello"),
            &RunnerConfig::default(),
        );
        assert_eq!(with_input.stdin, "hello");
    }

    #[test]
    fn source_is_forwarded_verbatim() {
        let code = "\u{0000}binary\n\tweird   whitespace  ";
        let payload = build("rust", code);
        assert_eq!(payload.files[0].content, code);
    }
}
