use super::payment::PaymentRequest;
use crate::error::GatewayError;
use async_trait::async_trait;

/// Outbound port to the payments backend.
///
/// One call per submission, no retries; adapters map whatever goes wrong
/// onto `GatewayError`.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn initiate(&self, request: &PaymentRequest) -> Result<(), GatewayError>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
