//! src/domain/mod.rs

mod applicant_email;
mod applicant_name;
mod application;
pub mod form_layout;
mod payment_reference;

pub use applicant_email::ApplicantEmail;
pub use applicant_name::ApplicantName;
pub use application::{ApplicationFields, NewApplication, REQUIRED_FIELDS};
pub use payment_reference::PaymentReference;

/// Validation error for domain data
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("`{0}` is not a valid applicant name.")]
    InvalidName(String),
    #[error("`{0}` is not a valid applicant email.")]
    InvalidEmail(String),
    #[error("`{0}` is not a valid payment reference.")]
    InvalidPaymentReference(String),
    #[error("Field `{0}` is not valid UTF-8 text.")]
    InvalidFieldEncoding(String),
}
