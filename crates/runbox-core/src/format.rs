//! Response formatter: service JSON to one display string
//!
//! The section order is fixed and not configurable: compile stdout (with a
//! labeled header), run stdout, compile stderr (labeled), run stderr (labeled).
//! Sections that are absent or empty are skipped. The final concatenation is
//! trimmed at the ends only; individual sections keep their internal
//! whitespace. An entirely silent response yields the literal fallback text.

use serde::Serialize;

use crate::types::{ExecuteResponse, ExecutionResult, PhaseOutput};

/// Fallback text when every section of the response is absent or empty.
pub const NO_OUTPUT: &str = "No output generated";

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|s| !s.is_empty())
}

fn phase<'a>(
    section: &'a Option<PhaseOutput>,
    pick: impl Fn(&'a PhaseOutput) -> &'a Option<String>,
) -> Option<&'a str> {
    section.as_ref().and_then(|p| non_empty(pick(p)))
}

/// Concatenate the response sections into one human-readable block.
pub fn format_output(response: &ExecuteResponse) -> String {
    let mut output = String::new();

    if let Some(stdout) = phase(&response.compile, |p| &p.stdout) {
        output.push_str(&format!("Compilation Output:\n{}\n\n", stdout));
    }

    if let Some(stdout) = phase(&response.run, |p| &p.stdout) {
        output.push_str(stdout);
    }

    if let Some(stderr) = phase(&response.compile, |p| &p.stderr) {
        output.push_str(&format!("\nCompilation Errors:\n{}", stderr));
    }

    if let Some(stderr) = phase(&response.run, |p| &p.stderr) {
        output.push_str(&format!("\nRuntime Errors:\n{}", stderr));
    }

    let trimmed = output.trim();
    if trimmed.is_empty() {
        NO_OUTPUT.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Reshape a service response into the result the display layer consumes.
///
/// The error field follows a pure precedence rule: compile stderr wins over
/// run stderr, even though both appear in the formatted output text.
pub fn into_result(response: &ExecuteResponse) -> ExecutionResult {
    let error = phase(&response.compile, |p| &p.stderr)
        .or_else(|| phase(&response.run, |p| &p.stderr))
        .map(str::to_string);

    let run = response.run.as_ref();

    ExecutionResult {
        output: format_output(response),
        error,
        execution_time: run.and_then(|r| r.runtime),
        memory: run.and_then(|r| r.memory),
    }
}

/// Display status of a result, driving the error indicator on each surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStatus {
    Success,
    Error,
}

/// Classify a result for display purposes.
///
/// Structural check first: a populated error field is authoritative. The
/// keyword scan of the output text is only a fallback for results that carry
/// no structured error, so legitimate output mentioning the word "error" in a
/// structurally clean result is not misflagged.
pub fn classify(result: &ExecutionResult) -> OutputStatus {
    if result.error.as_deref().is_some_and(|e| !e.is_empty()) {
        return OutputStatus::Error;
    }

    let lowered = result.output.to_lowercase();
    if lowered.contains("compilation errors") || lowered.contains("runtime errors") {
        return OutputStatus::Error;
    }

    OutputStatus::Success
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ExecuteResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn run_stdout_only_has_no_headers() {
        let resp = response(json!({ "run": { "stdout": "  hello world\n" } }));
        assert_eq!(format_output(&resp), "hello world");
    }

    #[test]
    fn all_sections_empty_yields_fallback_text() {
        assert_eq!(format_output(&response(json!({}))), NO_OUTPUT);
        assert_eq!(
            format_output(&response(json!({ "run": { "stdout": "", "stderr": "" } }))),
            NO_OUTPUT
        );
        assert_eq!(
            format_output(&response(json!({ "run": { "stdout": "   \n  " } }))),
            NO_OUTPUT
        );
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let resp = response(json!({
            "compile": { "stdout": "linking\n", "stderr": "warning: unused\n" },
            "run": { "stdout": "42\n", "stderr": "panicked\n" }
        }));
        let output = format_output(&resp);

        let compile_out = output.find("Compilation Output:").unwrap();
        let run_out = output.find("42").unwrap();
        let compile_err = output.find("Compilation Errors:").unwrap();
        let run_err = output.find("Runtime Errors:").unwrap();
        assert!(compile_out < run_out);
        assert!(run_out < compile_err);
        assert!(compile_err < run_err);
    }

    #[test]
    fn inner_whitespace_survives_outer_trim() {
        let resp = response(json!({
            "compile": { "stdout": "built\n" },
            "run": { "stdout": "  a  \n  b  \n" }
        }));
        let output = format_output(&resp);
        assert!(output.starts_with("Compilation Output:"));
        assert!(output.contains("  a  \n  b"));
        assert!(!output.ends_with('\n'));
    }

    #[test]
    fn compile_stderr_takes_precedence_in_error_field() {
        let resp = response(json!({
            "compile": { "stderr": "syntax error on line 3" },
            "run": { "stderr": "segfault" }
        }));
        let result = into_result(&resp);

        assert_eq!(result.error.as_deref(), Some("syntax error on line 3"));
        assert!(result.output.contains("Compilation Errors:\nsyntax error on line 3"));
        assert!(result.output.contains("Runtime Errors:\nsegfault"));
    }

    #[test]
    fn run_stderr_surfaces_when_compile_is_clean() {
        let resp = response(json!({ "run": { "stderr": "division by zero" } }));
        let result = into_result(&resp);
        assert_eq!(result.error.as_deref(), Some("division by zero"));
    }

    #[test]
    fn clean_response_leaves_error_unset() {
        let resp = response(json!({ "run": { "stdout": "ok\n", "runtime": 17, "memory": 2048 } }));
        let result = into_result(&resp);
        assert!(result.error.is_none());
        assert_eq!(result.execution_time, Some(17));
        assert_eq!(result.memory, Some(2048));
    }

    #[test]
    fn empty_stderr_does_not_count_as_error() {
        let resp = response(json!({
            "compile": { "stderr": "" },
            "run": { "stdout": "fine\n", "stderr": "" }
        }));
        let result = into_result(&resp);
        assert!(result.error.is_none());
        assert_eq!(result.output, "fine");
    }

    #[test]
    fn classify_prefers_structured_error() {
        let failed = ExecutionResult {
            output: String::new(),
            error: Some("Execution failed: HTTP error! status: 500".to_string()),
            ..Default::default()
        };
        assert_eq!(classify(&failed), OutputStatus::Error);
    }

    #[test]
    fn classify_does_not_misflag_output_mentioning_errors() {
        // A program legitimately printing the word "error" is still a success
        // as long as the structured error field is unset.
        let result = ExecutionResult {
            output: "error handling tutorial: step 1".to_string(),
            ..Default::default()
        };
        assert_eq!(classify(&result), OutputStatus::Success);
    }

    #[test]
    fn classify_falls_back_to_section_labels() {
        let result = ExecutionResult {
            output: "Runtime Errors:\nstack overflow".to_string(),
            ..Default::default()
        };
        assert_eq!(classify(&result), OutputStatus::Error);
    }
}
