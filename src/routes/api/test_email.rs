//! src/routes/api/test_email.rs

use actix_web::{web, HttpResponse};
use anyhow::Context;

use crate::email_client::{EmailClient, EmailContent};
use crate::error::ApiResult;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct TestEmailResponse {
    pub success: bool,
    pub message: String,
}

/// Fire a fixed diagnostic email through the configured transport.
#[tracing::instrument(name = "Send a test email", skip(email_client))]
pub async fn test_email(email_client: web::Data<EmailClient>) -> ApiResult<HttpResponse> {
    let content = EmailContent {
        subject: "SMTP Test Successful".into(),
        text_body: "Your email configuration is working!".into(),
        ..Default::default()
    };
    email_client
        .send_email(content)
        .await
        .context("Failed to send the test email.")?;
    Ok(HttpResponse::Ok().json(TestEmailResponse {
        success: true,
        message: "Test email sent".into(),
    }))
}
