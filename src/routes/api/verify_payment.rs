//! src/routes/api/verify_payment.rs

use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::configuration::PaymentSettings;
use crate::domain::PaymentReference;
use crate::error::{ApiError, ApiResult};
use crate::payment_client::{PaystackClient, VerifiedPayment};

#[derive(serde::Deserialize, serde::Serialize)]
pub struct VerifyPaymentRequest {
    /// The widget hands back strings, but numbers are accepted as well.
    #[serde(default)]
    pub reference: Option<Value>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub data: VerifiedPayment,
}

#[tracing::instrument(
    name = "Verify a payment",
    skip(body, payment_client, payment_settings),
    fields(payment_reference = ?body.reference)
)]
pub async fn verify_payment(
    body: web::Json<VerifyPaymentRequest>,
    payment_client: web::Data<PaystackClient>,
    payment_settings: web::Data<PaymentSettings>,
) -> ApiResult<HttpResponse> {
    let reference = reference_text(body.0.reference)
        .ok_or_else(|| ApiError::MalformedBody("Payment reference is required".into()))?;

    let payment = if payment_settings.mock_verification {
        tracing::info!("Mock verification, the payment provider is not contacted");
        mocked_payment(reference, payment_settings.application_fee_kobo)
    } else {
        let reference = PaymentReference::parse(reference)?;
        payment_client.verify_transaction(&reference).await?
    };
    Ok(HttpResponse::Ok().json(VerifyPaymentResponse {
        success: true,
        data: payment,
    }))
}

/// Non-blank string or number as text.
fn reference_text(reference: Option<Value>) -> Option<String> {
    match reference? {
        Value::String(reference) if !reference.trim().is_empty() => Some(reference),
        Value::Number(reference) => Some(reference.to_string()),
        _ => None,
    }
}

fn mocked_payment(reference: String, amount: u64) -> VerifiedPayment {
    VerifiedPayment {
        reference,
        status: "success".into(),
        amount,
        paid_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    }
}
