//! HTTP implementation of the execution backend over a Piston-compatible API.

use std::time::Duration;

use async_trait::async_trait;
use runbox_core::{
    build_payload, into_result, ExecuteResponse, ExecutionError, ExecutionRequest,
    ExecutionResult, RunnerConfig, RuntimeDescriptor,
};

use crate::ExecutionBackend;

/// HTTP client for a remote Piston-compatible execution service.
pub struct PistonClient {
    config: RunnerConfig,
    client: reqwest::Client,
}

impl PistonClient {
    pub fn new(config: RunnerConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    /// Client against the default public API, base URL overridable through
    /// the environment.
    pub fn from_env() -> Self {
        Self::new(RunnerConfig::from_env())
    }

    pub fn with_http_timeout(self, timeout: Duration) -> Self {
        Self::new(self.config.with_http_timeout(timeout))
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// The single round trip behind `execute`, with failures still typed.
    async fn post_execute(
        &self,
        request: &ExecutionRequest,
    ) -> Result<ExecuteResponse, ExecutionError> {
        let payload = build_payload(request, &self.config);

        let response = self
            .client
            .post(self.config.execute_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ExecutionError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExecutionError::Http(status.as_u16()));
        }

        response
            .json::<ExecuteResponse>()
            .await
            .map_err(|e| ExecutionError::malformed(e.to_string()))
    }
}

#[async_trait]
impl ExecutionBackend for PistonClient {
    async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        match self.post_execute(request).await {
            Ok(response) => into_result(&response),
            Err(err) => {
                log::error!("Code execution failed for {}: {}", request.language, err);
                ExecutionResult::from_failure(&err)
            }
        }
    }

    async fn runtimes(&self) -> Vec<RuntimeDescriptor> {
        let response = match self.client.get(self.config.runtimes_url()).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Failed to fetch available runtimes: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            log::warn!(
                "Runtime listing returned HTTP {}",
                response.status().as_u16()
            );
            return Vec::new();
        }

        match response.json::<Vec<RuntimeDescriptor>>().await {
            Ok(runtimes) => runtimes,
            Err(e) => {
                log::warn!("Failed to parse runtime listing: {}", e);
                Vec::new()
            }
        }
    }
}
