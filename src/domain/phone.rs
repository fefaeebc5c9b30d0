use crate::error::{CheckoutError, Result};
use serde::Serialize;
use std::fmt;

/// Country calling code prepended to every submitted number.
pub const COUNTRY_CODE: &str = "237";
/// National numbers carry exactly nine digits after the country code.
pub const SUFFIX_LEN: usize = 9;

/// The user-entered national part of the phone number.
///
/// Holds between zero and nine ASCII digits. The sanitizer is the only
/// constructor, so a suffix can be incomplete but never malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSuffix(String);

impl PhoneSuffix {
    /// Builds a suffix from raw input, keeping only digits and truncating
    /// to nine characters. Applied to every edit of the phone field.
    pub fn sanitized(raw: &str) -> Self {
        Self(
            raw.chars()
                .filter(char::is_ascii_digit)
                .take(SUFFIX_LEN)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A suffix is submittable only once all nine digits are present.
    pub fn is_complete(&self) -> bool {
        self.0.len() == SUFFIX_LEN
    }
}

impl fmt::Display for PhoneSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full subscriber number: country code followed by a complete suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Fails unless the suffix is complete; the incomplete form must never
    /// reach the wire.
    pub fn from_suffix(suffix: &PhoneSuffix) -> Result<Self> {
        if !suffix.is_complete() {
            return Err(CheckoutError::ValidationError(format!(
                "phone suffix must be exactly {SUFFIX_LEN} digits"
            )));
        }
        Ok(Self(format!("{COUNTRY_CODE}{}", suffix.as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
