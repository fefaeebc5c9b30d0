use crate::domain::form::FormState;
use crate::domain::payment::{CHECKOUT_AMOUNT, PaymentMethod};
use crate::domain::phone::COUNTRY_CODE;
use std::io::{self, Write};

pub const TITLE: &str = "FRAIS DE LA DEMANDE";
pub const CURRENCY: &str = "Fr. CFA";
pub const BTN_PAY: &str = "Payer";
pub const BTN_SENDING: &str = "Envoi...";
const PHONE_PLACEHOLDER: &str = "<entrez 9 chiffres>";

/// fr-FR digit grouping: a space every three digits ("10 000").
pub fn format_amount(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Draws the checkout card in its current state.
///
/// The status banner appears only once a submission has been attempted,
/// and the submit control reads as sending while the call is in flight.
pub fn render_card(state: &FormState, out: &mut impl Write) -> io::Result<()> {
    let amount = format_amount(CHECKOUT_AMOUNT);

    writeln!(out)?;
    writeln!(out, "=== {TITLE} ===")?;
    writeln!(out, "    {amount} {CURRENCY}")?;
    writeln!(
        out,
        "Assurez-vous d'avoir {amount} {CURRENCY} sur votre compte Orange Money ou Mobile Money."
    )?;
    writeln!(out)?;

    for method in [PaymentMethod::OrangeMoney, PaymentMethod::MtnMomo] {
        let mark = if state.method == method { 'x' } else { ' ' };
        let hint = match method {
            PaymentMethod::OrangeMoney => "orange",
            PaymentMethod::MtnMomo => "momo",
        };
        writeln!(out, "  ({mark}) {:<12} [{hint}]", method.label())?;
    }
    writeln!(out)?;

    if state.phone.is_empty() {
        writeln!(out, "  Numéro de téléphone : +{COUNTRY_CODE} {PHONE_PLACEHOLDER}")?;
    } else {
        writeln!(out, "  Numéro de téléphone : +{COUNTRY_CODE} {}", state.phone)?;
    }

    let button = if state.phase.is_loading() {
        BTN_SENDING
    } else {
        BTN_PAY
    };
    writeln!(out, "  [payer] {button}")?;

    if let Some(banner) = state.phase.banner() {
        writeln!(out)?;
        writeln!(out, "{banner}")?;
    }
    out.flush()
}

/// Blocking alert line, outside the card. The form state is untouched.
pub fn render_alert(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "⚠ {message}")?;
    out.flush()
}
