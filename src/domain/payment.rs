use super::phone::PhoneNumber;
use serde::Serialize;

/// Fixed checkout amount, in Fr. CFA.
pub const CHECKOUT_AMOUNT: u32 = 10_000;

/// The two wallets offered by the checkout card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    OrangeMoney,
    MtnMomo,
}

impl PaymentMethod {
    /// Provider code expected by the payments backend.
    pub fn operator(self) -> Operator {
        match self {
            Self::OrangeMoney => Operator::Orange,
            Self::MtnMomo => Operator::Mtn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::OrangeMoney => "Orange Money",
            Self::MtnMomo => "Mobile Money",
        }
    }
}

/// Wire code of the mobile-money provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    Orange,
    Mtn,
}

/// Body of the payment-initiation call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentRequest {
    pub amount: u32,
    pub customer_phone: PhoneNumber,
    pub operator: Operator,
    pub merchant_id: String,
}

impl PaymentRequest {
    /// The amount is not a parameter: every checkout charges the same fee.
    pub fn new(customer_phone: PhoneNumber, operator: Operator, merchant_id: String) -> Self {
        Self {
            amount: CHECKOUT_AMOUNT,
            customer_phone,
            operator,
            merchant_id,
        }
    }
}
