use crate::domain::payment::PaymentRequest;
use crate::domain::ports::PaymentGateway;
use crate::error::GatewayError;
use async_trait::async_trait;
use serde::Deserialize;

/// Relative path of the payment-initiation endpoint.
pub const INITIATE_PATH: &str = "/api/v1/payments/initiate";
/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Error payload of the payments backend; only `message` is surfaced.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Gateway adapter over the payments HTTP API.
///
/// Any 2xx response is a success and the body is not inspected further.
/// On a non-2xx response the body is decoded on a best-effort basis to
/// recover the optional `message` field. Timeouts are whatever the client
/// defaults to.
pub struct HttpPaymentGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpPaymentGateway {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{INITIATE_PATH}", self.base_url)
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    async fn initiate(&self, request: &PaymentRequest) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        Err(GatewayError::Rejected { message })
    }
}
