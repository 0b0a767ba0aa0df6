// Scripted stand-in for the remote execution service, used by client tests.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Json as AxumJson, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use runbox_core::ExecutePayload;
use serde_json::json;
use tokio::net::TcpListener;

/// One scripted reply for the `/execute` endpoint.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// 200 with the given JSON body.
    Ok(serde_json::Value),
    /// The given status with an empty body.
    Status(u16),
    /// 200 with a verbatim (possibly invalid) body.
    Raw(String),
}

impl MockReply {
    pub fn ok(body: serde_json::Value) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn raw(body: impl Into<String>) -> Self {
        Self::Raw(body.into())
    }
}

#[derive(Clone)]
struct MockState {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<ExecutePayload>>>,
}

async fn execute_handler(
    State(state): State<MockState>,
    AxumJson(payload): AxumJson<ExecutePayload>,
) -> Response {
    state.requests.lock().unwrap().push(payload);

    match state.replies.lock().unwrap().pop_front() {
        Some(MockReply::Ok(body)) => Json(body).into_response(),
        Some(MockReply::Status(code)) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Some(MockReply::Raw(body)) => (
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        None => {
            log::error!("Mock execution service ran out of scripted replies");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

async fn runtimes_handler() -> Json<serde_json::Value> {
    Json(json!([
        { "language": "go", "version": "1.16.2", "aliases": ["golang"] },
        { "language": "python", "version": "3.10.0", "aliases": ["py"] }
    ]))
}

/// In-process execution service replaying scripted replies and recording the
/// payloads it receives.
pub struct MockExecutionService {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    requests: Arc<Mutex<Vec<ExecutePayload>>>,
}

impl MockExecutionService {
    pub async fn start(replies: Vec<MockReply>) -> Self {
        let state = MockState {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();

        let app = Router::new()
            .route("/execute", post(execute_handler))
            .route("/runtimes", get(runtimes_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock execution service");
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap_or_else(|e| log::error!("Mock execution service error: {}", e));
        });

        Self {
            addr,
            shutdown_tx,
            requests,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn recorded_requests(&self) -> Vec<ExecutePayload> {
        self.requests.lock().unwrap().clone()
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
    }
}
