use crate::domain::payment::PaymentRequest;
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;

/// Gateway that accepts every request without touching the network.
///
/// Selected with `--dry-run`; also what the end-to-end suite drives the
/// binary with.
#[derive(Debug, Default, Clone, Copy)]
pub struct SandboxGateway;

impl SandboxGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn initiate(&self, _request: &PaymentRequest) -> Result<(), GatewayError> {
        Ok(())
    }
}
