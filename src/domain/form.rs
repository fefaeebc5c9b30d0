use super::payment::PaymentMethod;
use super::phone::PhoneSuffix;
use crate::error::GatewayError;

/// Banner shown while the initiation call is in flight.
pub const MSG_PROCESSING: &str = "💳 Paiement en cours...";
/// Banner shown once the backend accepted the initiation.
pub const MSG_CONFIRM: &str = "✅ Paiement initié ! Veuillez confirmer sur votre téléphone.";
/// Fallback text when a failure carries no server-provided message.
pub const MSG_FAILURE_FALLBACK: &str = "Erreur lors du paiement";
/// Blocking alert raised for a malformed phone number.
pub const MSG_INVALID_PHONE: &str = "Veuillez entrer un numéro de téléphone valide (9 chiffres).";

/// Submission phase of the checkout card.
///
/// The banner text is derived from the phase, so a message can never
/// disagree with the status it accompanies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed {
        message: String,
    },
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Status line for the card. `None` until the first submission attempt.
    pub fn banner(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Pending => Some(MSG_PROCESSING.to_string()),
            Self::Succeeded => Some(MSG_CONFIRM.to_string()),
            Self::Failed { message } => Some(format!("❌ {message}")),
        }
    }
}

/// The whole state of the checkout card, transitioned by explicit actions.
///
/// Actions consume the record and hand back its successor; handlers never
/// mutate individual fields in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub phone: PhoneSuffix,
    pub method: PaymentMethod,
    pub phase: Phase,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phone-field edit: raw input goes through the sanitizer, everything
    /// else stays as it was.
    pub fn edit_phone(mut self, raw: &str) -> Self {
        self.phone = PhoneSuffix::sanitized(raw);
        self
    }

    /// Selector change takes effect immediately, no validation.
    pub fn select_method(mut self, method: PaymentMethod) -> Self {
        self.method = method;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Moves the form into the pending phase. Refused while a submission is
    /// already in flight; the unchanged state is handed back either way.
    pub fn begin_submission(mut self) -> std::result::Result<Self, Self> {
        if self.is_loading() {
            return Err(self);
        }
        self.phase = Phase::Pending;
        Ok(self)
    }

    /// Settles a pending submission with the gateway outcome.
    pub fn complete(mut self, outcome: std::result::Result<(), GatewayError>) -> Self {
        self.phase = match outcome {
            Ok(()) => Phase::Succeeded,
            Err(err) => Phase::Failed {
                message: err
                    .server_message()
                    .unwrap_or(MSG_FAILURE_FALLBACK)
                    .to_string(),
            },
        };
        self
    }
}
