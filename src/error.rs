//! src/error.rs

use crate::domain::ValidationError;
use crate::payment_client::PaymentError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

pub type ApiResult<T> = Result<T, ApiError>;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    MalformedBody(String),
    #[error("{0}")]
    PaymentRejected(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// JSON envelope returned for every failed API call
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl From<PaymentError> for ApiError {
    fn from(e: PaymentError) -> Self {
        match e {
            PaymentError::Rejected(message) => ApiError::PaymentRejected(message),
            PaymentError::UnexpectedError(e) => {
                ApiError::UnexpectedError(e.context("Internal server error during verification"))
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // a submission without its required fields is answered like a failed send
            ApiError::Validation(ValidationError::MissingFields(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::PaymentRejected(_) => StatusCode::BAD_REQUEST,
            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Display of anyhow::Error only shows the outermost context,
        // the cause chain stays in the logs.
        HttpResponse::build(self.status_code()).json(ErrorBody {
            success: false,
            error: self.to_string(),
        })
    }
}
