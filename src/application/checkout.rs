use crate::domain::form::FormState;
use crate::domain::payment::PaymentRequest;
use crate::domain::phone::PhoneNumber;
use crate::domain::ports::PaymentGatewayBox;
use crate::error::{GatewayError, Result};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Orchestrates one checkout attempt.
///
/// `CheckoutEngine` owns the gateway port and the merchant identity. It
/// splits a submission into a synchronous half (`prepare`, which validates
/// the form and assembles the wire request) and an asynchronous half
/// (`initiate`, the single outbound call).
pub struct CheckoutEngine {
    gateway: PaymentGatewayBox,
    merchant_id: String,
}

impl CheckoutEngine {
    /// Creates a new `CheckoutEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `gateway` - The adapter carrying requests to the payments backend.
    /// * `merchant_id` - The receiving account, injected at startup.
    pub fn new(gateway: PaymentGatewayBox, merchant_id: String) -> Self {
        Self {
            gateway,
            merchant_id,
        }
    }

    /// Validates the form and assembles the request body.
    ///
    /// Fails with a validation error before any network activity when the
    /// phone suffix is not exactly nine digits.
    pub fn prepare(&self, state: &FormState) -> Result<PaymentRequest> {
        let phone = PhoneNumber::from_suffix(&state.phone)?;
        Ok(PaymentRequest::new(
            phone,
            state.method.operator(),
            self.merchant_id.clone(),
        ))
    }

    /// Hands the request to the gateway. Exactly one outbound call, no
    /// retries; the outcome settles the form either way.
    pub async fn initiate(&self, request: &PaymentRequest) -> std::result::Result<(), GatewayError> {
        self.gateway.initiate(request).await
    }
}

/// An in-flight submission, held as an explicit task.
///
/// The session aborts it on teardown; a settling call must never touch a
/// form that is already gone.
pub struct Submission {
    handle: JoinHandle<std::result::Result<(), GatewayError>>,
}

impl Submission {
    pub fn spawn(engine: Arc<CheckoutEngine>, request: PaymentRequest) -> Self {
        let handle = tokio::spawn(async move { engine.initiate(&request).await });
        Self { handle }
    }

    /// Waits for the gateway call to settle. An aborted or panicked task
    /// is reported as a transport failure.
    pub async fn outcome(&mut self) -> std::result::Result<(), GatewayError> {
        match (&mut self.handle).await {
            Ok(outcome) => outcome,
            Err(join_err) => Err(GatewayError::Transport(join_err.to_string())),
        }
    }

    pub fn abort(&self) {
        self.handle.abort();
    }
}
