//! Sequenced execution sessions
//!
//! A user can trigger a new run while a previous one is still in flight, and
//! the two responses race to update the same display state. The session runner
//! makes the ordering explicit: every run is tagged with a monotonically
//! increasing sequence number, and a response is delivered only if no
//! later-submitted run has already delivered. Stale responses are discarded,
//! never shown.

use std::sync::atomic::{AtomicU64, Ordering};

use runbox_core::{ExecutionRequest, ExecutionResult};

use crate::ExecutionBackend;

/// Wraps a backend with last-submission-wins delivery semantics.
pub struct SessionRunner<B> {
    backend: B,
    next_seq: AtomicU64,
    delivered_seq: AtomicU64,
}

impl<B: ExecutionBackend> SessionRunner<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            next_seq: AtomicU64::new(1),
            delivered_seq: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run a request, delivering the result only if it is still current.
    ///
    /// Returns `None` when a run submitted later than this one has already
    /// delivered its result; the display state then belongs to that newer run.
    pub async fn run_latest(&self, request: &ExecutionRequest) -> Option<ExecutionResult> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let result = self.backend.execute(request).await;

        let mut current = self.delivered_seq.load(Ordering::Acquire);
        loop {
            if seq <= current {
                log::debug!("Discarding stale execution result (seq {})", seq);
                return None;
            }
            match self.delivered_seq.compare_exchange_weak(
                current,
                seq,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Some(result),
                Err(observed) => current = observed,
            }
        }
    }
}
