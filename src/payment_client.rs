//! src/payment_client.rs

use crate::domain::PaymentReference;
use crate::error::error_chain_fmt;
use anyhow::Context;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

#[derive(thiserror::Error)]
pub enum PaymentError {
    /// The provider answered, but does not confirm the transaction.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Verified transaction as handed back to the browser.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedPayment {
    pub reference: String,
    pub status: String,
    /// amount in kobo
    pub amount: u64,
    pub paid_at: Option<String>,
}

#[derive(serde::Deserialize)]
struct VerifyResponse {
    status: bool,
    #[serde(default)]
    message: Option<String>,
    data: Option<TransactionData>,
}

#[derive(serde::Deserialize)]
struct TransactionData {
    reference: String,
    status: String,
    amount: u64,
    paid_at: Option<String>,
}

pub struct PaystackClient {
    http_client: Client,
    base_url: String,
    secret_key: Secret<String>,
}

impl PaystackClient {
    pub fn new(
        base_url: String,
        secret_key: Secret<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the payment provider HTTP client.")?;
        Ok(Self {
            http_client,
            base_url,
            secret_key,
        })
    }

    #[tracing::instrument(name = "Verify transaction with Paystack", skip(self))]
    pub async fn verify_transaction(
        &self,
        reference: &PaymentReference,
    ) -> Result<VerifiedPayment, PaymentError> {
        let url = format!(
            "{}/transaction/verify/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(reference.as_ref())
        );
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.secret_key.expose_secret())
            .header("Content-Type", "application/json")
            .send()
            .await
            .context("Failed to reach the payment provider.")?;

        let http_status = response.status();
        // A body that is not the provider's JSON envelope means the provider is down,
        // not that it refused the payment.
        let body = response
            .json::<VerifyResponse>()
            .await
            .with_context(|| {
                format!(
                    "The payment provider answered {} with an unreadable body.",
                    http_status
                )
            })?;
        match body {
            VerifyResponse {
                status: true,
                data: Some(data),
                ..
            } if http_status.is_success() => Ok(VerifiedPayment {
                reference: data.reference,
                status: data.status,
                amount: data.amount,
                paid_at: data.paid_at,
            }),
            VerifyResponse { status: true, .. } if http_status.is_success() => Err(
                anyhow::anyhow!("The payment provider confirmed without transaction data.").into(),
            ),
            VerifyResponse {
                message: Some(message),
                ..
            } if !message.is_empty() => {
                tracing::warn!(%http_status, %message, "Payment provider rejected verification");
                Err(PaymentError::Rejected(message))
            }
            _ => Err(PaymentError::Rejected("Payment verification failed".into())),
        }
    }
}
