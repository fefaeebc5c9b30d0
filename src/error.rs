use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Failure raised by a payment gateway adapter.
///
/// Every variant settles the form into the failed phase; the distinction
/// only matters for whether a server-provided message can be shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status. Carries the optional
    /// `message` field of the response body, surfaced to the user verbatim.
    #[error("payment request rejected by the gateway")]
    Rejected { message: Option<String> },
    /// Connectivity or protocol failure before any response was obtained.
    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    /// Server-provided text suitable for display, if the backend sent any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message } => message.as_deref(),
            Self::Transport(_) => None,
        }
    }
}
