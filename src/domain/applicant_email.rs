//! src/domain/applicant_email.rs

use crate::domain::ValidationError;
use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct ApplicantEmail(String);

impl ApplicantEmail {
    pub fn parse(s: String) -> Result<ApplicantEmail, ValidationError> {
        let trimmed = s.trim();
        if trimmed.validate_email() {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::InvalidEmail(s))
        }
    }
}

impl AsRef<str> for ApplicantEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicantEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
