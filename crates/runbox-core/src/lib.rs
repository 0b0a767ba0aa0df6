//! Core types and request/response mapping for remote code execution
//!
//! This crate is the boundary adapter between user-facing surfaces (server, CLI)
//! and a Piston-compatible execution service. It owns the static language
//! catalog, the translation from a (language, source) pair into the service's
//! wire payload, and the reshaping of the service's response into a single
//! display string. Keeping this logic free of any HTTP machinery means every
//! surface formats results identically and the mapping can be tested without a
//! network.

pub mod config;
pub mod errors;
pub mod format;
pub mod languages;
pub mod request;
pub mod snippets;
pub mod types;

pub use config::RunnerConfig;
pub use errors::ExecutionError;
pub use format::{classify, format_output, into_result, OutputStatus, NO_OUTPUT};
pub use languages::{
    infer_language, is_supported, language_catalog, runtime_config, source_file_name, LanguageInfo,
    LanguageRuntimeConfig,
};
pub use request::build_payload;
pub use snippets::default_snippet;
pub use types::{
    ExecutePayload, ExecuteResponse, ExecutionRequest, ExecutionResult, PhaseOutput,
    RuntimeDescriptor, SourceFile,
};
