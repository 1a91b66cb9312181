//! src/domain/applicant_name.rs

use crate::domain::ValidationError;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone)]
pub struct ApplicantName(String);

impl ApplicantName {
    /// Returns an instance of `ApplicantName` if the input satisfies all
    /// our validation constraints on applicant names.
    /// Names end up in the email subject, so line breaks and other
    /// control characters are rejected.
    pub fn parse(s: String) -> Result<ApplicantName, ValidationError> {
        let trimmed = s.trim();
        let is_empty_or_whitespace = trimmed.is_empty();
        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two characters
        // (`a` and `̊`).
        let is_too_long = trimmed.graphemes(true).count() > 256;
        let contains_control_characters = trimmed.chars().any(char::is_control);
        if is_empty_or_whitespace || is_too_long || contains_control_characters {
            Err(ValidationError::InvalidName(s))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }
}

impl AsRef<str> for ApplicantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicantName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
