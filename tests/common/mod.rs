use async_trait::async_trait;
use momo_checkout::domain::payment::PaymentRequest;
use momo_checkout::domain::ports::PaymentGateway;
use momo_checkout::error::GatewayError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted gateway double.
///
/// Records every request it sees and replays a fixed outcome, optionally
/// holding each call until `release` is called. Clones share the record,
/// so a test can keep one handle while the engine owns the other.
#[derive(Clone)]
pub struct RecordingGateway {
    inner: Arc<Inner>,
}

struct Inner {
    outcome: Result<(), GatewayError>,
    calls: AtomicUsize,
    requests: Mutex<Vec<PaymentRequest>>,
    gate: Option<Notify>,
}

impl RecordingGateway {
    pub fn succeeding() -> Self {
        Self::with_outcome(Ok(()), false)
    }

    pub fn rejecting(message: Option<&str>) -> Self {
        Self::with_outcome(
            Err(GatewayError::Rejected {
                message: message.map(String::from),
            }),
            false,
        )
    }

    /// Succeeds, but only after `release` has been called once per request.
    pub fn gated() -> Self {
        Self::with_outcome(Ok(()), true)
    }

    fn with_outcome(outcome: Result<(), GatewayError>, gated: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                outcome,
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
                gate: gated.then(Notify::new),
            }),
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.inner.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<PaymentRequest> {
        self.inner.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn initiate(&self, request: &PaymentRequest) -> Result<(), GatewayError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.inner.gate {
            gate.notified().await;
        }
        self.inner.outcome.clone()
    }
}
