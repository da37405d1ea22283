use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::api::{MeterSnapshot, SnapshotSource};
use crate::logic::errors::{classify_error, format_error_message, ErrorType};
use crate::logic::schedule::MIN_REFRESH_LATENCY;

/// What triggered a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    Scheduled, // Startup and the periodic timer
    Manual,    // User pressed refresh
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub origin: FetchOrigin,
    /// Wait before the fetch starts
    pub delay: Duration,
}

impl FetchRequest {
    pub fn scheduled() -> Self {
        Self {
            origin: FetchOrigin::Scheduled,
            delay: Duration::ZERO,
        }
    }

    pub fn manual() -> Self {
        Self {
            origin: FetchOrigin::Manual,
            delay: MIN_REFRESH_LATENCY,
        }
    }
}

/// Why a fetch failed. The cause is kept for logs only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub error_type: ErrorType,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub origin: FetchOrigin,
    /// Stamped when the fetch starts; later fetches get larger numbers
    pub seq: u64,
    pub result: Result<Option<MeterSnapshot>, FetchFailure>,
}

/// Monotonic counter shared by every fetch task
#[derive(Debug, Clone, Default)]
pub struct RequestSequence(Arc<AtomicU64>);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next sequence number, starting at 1
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Run one fetch against `source` and package the outcome
pub async fn execute_fetch<S>(source: &S, origin: FetchOrigin, seq: u64) -> FetchResponse
where
    S: SnapshotSource + Sync,
{
    tracing::debug!(seq, ?origin, source = %source.describe(), "fetching snapshot");

    let result = match source.fetch().await {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            let error_type = classify_error(&e);
            tracing::warn!(
                seq,
                error_type = error_type.as_str(),
                "Error loading data: {:#}",
                e
            );
            Err(FetchFailure {
                error_type,
                message: format_error_message(&e),
            })
        }
    };

    FetchResponse {
        origin,
        seq,
        result,
    }
}

/// Spawn the fetch worker
///
/// Each request gets its own task, so a slow manual refresh never holds up
/// the periodic poll and vice versa. Every request yields exactly one
/// response, numbered from `sequence` when its fetch starts.
pub fn spawn_fetch_service<S>(
    source: S,
    sequence: RequestSequence,
) -> (
    mpsc::UnboundedSender<FetchRequest>,
    mpsc::UnboundedReceiver<FetchResponse>,
)
where
    S: SnapshotSource + Send + Sync + 'static,
{
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel();

    let source = Arc::new(source);

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let source = Arc::clone(&source);
            let response_tx = response_tx.clone();
            let sequence = sequence.clone();

            tokio::spawn(async move {
                if !request.delay.is_zero() {
                    tokio::time::sleep(request.delay).await;
                }

                let seq = sequence.next();
                let response = execute_fetch(source.as_ref(), request.origin, seq).await;
                let _ = response_tx.send(response);
            });
        }

        tracing::debug!("fetch service stopped: request channel closed");
    });

    (request_tx, response_rx)
}
