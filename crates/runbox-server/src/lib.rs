//! HTTP API for browsing languages and running code on a remote service
//!
//! This crate exposes the runbox surface over plain JSON endpoints: a home
//! listing of supported languages, a per-language page with the pinned runtime
//! and a starter snippet, a run endpoint, and a proxy for the remote runtime
//! list. The execution backend is injected, so the routes can be served over
//! any `ExecutionBackend` implementation — the real HTTP client in production,
//! a scripted fake in tests.
//!
//! Execution failures never surface as HTTP errors on the run endpoint. The
//! remote service's problems are reported inside the result body, matching the
//! boundary contract of the core crate.

pub mod error;

pub use error::{Result, ServerError};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Json as AxumJson, Path, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use runbox_client::ExecutionBackend;
use runbox_core::{
    classify, default_snippet, is_supported, language_catalog, runtime_config,
    ExecutionRequest, ExecutionResult, OutputStatus, RuntimeDescriptor,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Configuration for the runbox server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Enable CORS
    pub enable_cors: bool,
    /// Enable request logging
    pub enable_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            enable_cors: true,
            enable_logging: true,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Parse and set the bind address from a string.
    pub fn with_bind_addr_str(mut self, addr: &str) -> Result<Self> {
        self.bind_addr = addr
            .parse()
            .map_err(|e| ServerError::config_error(format!("Invalid bind address: {}", e)))?;
        Ok(self)
    }

    /// Enable or disable CORS.
    pub fn with_cors(mut self, enable: bool) -> Self {
        self.enable_cors = enable;
        self
    }

    /// Enable or disable request logging.
    pub fn with_logging(mut self, enable: bool) -> Self {
        self.enable_logging = enable;
        self
    }
}

/// Shared application state: the injected backend and the configuration.
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn ExecutionBackend>,
    pub config: ServerConfig,
}

/// One entry of the home listing.
#[derive(Serialize)]
struct LanguageListing {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    version: &'static str,
}

/// Per-language page data: the resolved runtime and a starter snippet.
#[derive(Serialize)]
struct LanguagePage {
    id: String,
    /// False when the identifier resolved through the python fallback.
    supported: bool,
    runtime: RuntimeView,
    snippet: &'static str,
}

#[derive(Serialize)]
struct RuntimeView {
    language: &'static str,
    version: &'static str,
    file_name: &'static str,
}

/// Body of the run endpoint.
#[derive(Deserialize)]
struct RunRequest {
    code: String,
    #[serde(default)]
    input: Option<String>,
}

/// Run endpoint response: the result plus its display classification.
#[derive(Serialize)]
struct RunResponse {
    #[serde(flatten)]
    result: ExecutionResult,
    status: OutputStatus,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handler for the `/api/languages` home listing.
async fn languages_handler() -> Json<Vec<LanguageListing>> {
    let listing = language_catalog()
        .iter()
        .map(|info| LanguageListing {
            id: info.id,
            name: info.name,
            description: info.description,
            version: runtime_config(info.id).version,
        })
        .collect();
    Json(listing)
}

/// Handler for the per-language page. Unknown identifiers resolve through the
/// python fallback and still answer 200; the permissive policy of the request
/// builder applies to the route surface as well.
async fn language_page_handler(Path(language): Path<String>) -> Json<LanguagePage> {
    let runtime = runtime_config(&language);
    Json(LanguagePage {
        supported: is_supported(&language),
        runtime: RuntimeView {
            language: runtime.language,
            version: runtime.version,
            file_name: runtime.file_name,
        },
        snippet: default_snippet(&language),
        id: language,
    })
}

/// Handler for the run endpoint. Always answers 200; failures are in-band.
async fn run_handler(
    State(state): State<AppState>,
    Path(language): Path<String>,
    AxumJson(body): AxumJson<RunRequest>,
) -> Json<RunResponse> {
    log::info!("Run request for language: {}", language);

    let mut request = ExecutionRequest::new(language, body.code);
    request.input = body.input;

    let result = state.backend.execute(&request).await;
    let status = classify(&result);
    Json(RunResponse { result, status })
}

/// Handler for the runtime-list proxy. Remote failure yields an empty list.
async fn runtimes_handler(State(state): State<AppState>) -> Json<Vec<RuntimeDescriptor>> {
    Json(state.backend.runtimes().await)
}

/// Build the application router for the given state.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/languages/{language}", get(language_page_handler))
        .route("/api/languages/{language}/run", post(run_handler))
        .route("/api/runtimes", get(runtimes_handler));

    if state.config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    if state.config.enable_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

/// The runbox API server.
pub struct RunboxServer {
    state: AppState,
}

impl RunboxServer {
    pub fn new(backend: Arc<dyn ExecutionBackend>) -> Self {
        Self::with_config(backend, ServerConfig::default())
    }

    pub fn with_config(backend: Arc<dyn ExecutionBackend>, config: ServerConfig) -> Self {
        Self {
            state: AppState { backend, config },
        }
    }

    /// Serve until the process is terminated.
    pub async fn serve(self) -> Result<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until the given future resolves, then shut down gracefully.
    pub async fn serve_with_shutdown(
        self,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let bind_addr = self.state.config.bind_addr;
        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        log::info!("Runbox server listening on {}", bind_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

/// Resolves when ctrl-c is received.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
    log::info!("Shutdown signal received");
}
