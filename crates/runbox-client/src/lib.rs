//! Client for remote code execution services
//!
//! This crate owns the transport side of runbox: one POST per run against a
//! Piston-compatible `/execute` endpoint and one GET against `/runtimes`. The
//! `ExecutionBackend` trait is the seam every surface programs against, so
//! tests and embedded deployments can substitute the HTTP client without code
//! changes. By contract the backend never fails outward: transport and decode
//! problems come back as error-shaped `ExecutionResult`s, and a failed runtime
//! listing degrades to an empty list.

use async_trait::async_trait;
use runbox_core::{ExecutionRequest, ExecutionResult, RuntimeDescriptor};

pub mod http_client;
pub mod session;

#[cfg(test)]
pub mod test_utils;

pub use http_client::PistonClient;
pub use session::SessionRunner;

/// Backend for executing code on a remote service.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    /// Run one request. Failures are reported inside the result, never
    /// returned as errors; this call performs exactly one network round trip,
    /// with no retry or queuing.
    async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult;

    /// List the runtimes the remote service supports. A failed or malformed
    /// listing yields an empty vector.
    async fn runtimes(&self) -> Vec<RuntimeDescriptor>;
}
