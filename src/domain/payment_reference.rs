//! src/domain/payment_reference.rs

use crate::domain::ValidationError;

/// Opaque transaction reference handed out by the payment widget.
#[derive(Debug, Clone)]
pub struct PaymentReference(String);

impl PaymentReference {
    const MAX_LENGTH: usize = 100;

    pub fn parse(s: String) -> Result<PaymentReference, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.chars().count() > Self::MAX_LENGTH
            || trimmed
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            Err(ValidationError::InvalidPaymentReference(s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for PaymentReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
