use crate::error::{CheckoutError, Result};

pub const ENV_API_KEY: &str = "MOMO_API_KEY";
pub const ENV_MERCHANT_ID: &str = "MOMO_MERCHANT_ID";
pub const ENV_BASE_URL: &str = "MOMO_BASE_URL";

/// Runtime configuration of the checkout binary.
///
/// Secrets come exclusively from the environment at startup. There are no
/// fallback values: a missing key aborts before any request can be built.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub merchant_id: String,
    pub base_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: require(ENV_API_KEY)?,
            merchant_id: require(ENV_MERCHANT_ID)?,
            base_url: std::env::var(ENV_BASE_URL)
                .ok()
                .filter(|value| !value.trim().is_empty()),
        })
    }
}

fn require(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CheckoutError::ConfigError(format!("{name} must be set"))),
    }
}
