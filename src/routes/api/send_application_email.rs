//! src/routes/api/send_application_email.rs

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use anyhow::Context;
use futures_util::StreamExt;
use tracing::field::display;
use tracing::Span;

use crate::configuration::UploadSettings;
use crate::domain::{ApplicationFields, NewApplication, ValidationError};
use crate::email_client::{EmailClient, EmailContent};
use crate::error::{ApiError, ApiResult};
use crate::uploads::TempUploads;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message_id: String,
}

#[tracing::instrument(
    name = "Submit an admission application",
    skip_all,
    fields(
        applicant_email = tracing::field::Empty,
        payment_reference = tracing::field::Empty
    )
)]
pub async fn send_application_email(
    payload: Multipart,
    email_client: web::Data<EmailClient>,
    upload_settings: web::Data<UploadSettings>,
) -> ApiResult<HttpResponse> {
    let mut uploads = TempUploads::new(upload_settings.temp_dir.clone());
    let outcome = submit_application(payload, &email_client, &mut uploads).await;
    // temp files go away whether the mail went out or not
    uploads.cleanup().await;
    let message_id = outcome?;
    Ok(HttpResponse::Ok().json(SubmissionResponse {
        success: true,
        message_id,
    }))
}

async fn submit_application(
    payload: Multipart,
    email_client: &EmailClient,
    uploads: &mut TempUploads,
) -> ApiResult<String> {
    uploads
        .prepare()
        .await
        .context("Failed to store the uploaded files.")?;
    let fields = read_submission(payload, uploads).await?;
    let application: NewApplication = fields.try_into()?;
    Span::current().record("applicant_email", display(&application.email));
    if let Some(reference) = &application.payment_reference {
        Span::current().record("payment_reference", display(reference));
    }

    let content = EmailContent {
        subject: application.subject(),
        text_body: application.text_body(),
        html_body: Some(application.html_body()),
        reply_to: Some(application.email.clone()),
        attachments: uploads.files().to_vec(),
    };
    let message_id = email_client
        .send_email(content)
        .await
        .context("Failed to send the application email.")?;
    Ok(message_id)
}

/// Split the multipart body into text fields and files.
///
/// Parts carrying a file name are files and land in `uploads`,
/// every other part is a text field.
#[tracing::instrument(name = "Read application form data", skip_all)]
async fn read_submission(
    mut payload: Multipart,
    uploads: &mut TempUploads,
) -> ApiResult<ApplicationFields> {
    let mut fields = ApplicationFields::new();
    while let Some(part) = payload.next().await {
        let mut part = part.map_err(|e| ApiError::MalformedBody(format!("Invalid form data: {}", e)))?;
        let name = part.name().unwrap_or_default().to_string();
        let filename = part
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = part.content_type().map(|mime| mime.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = part.next().await {
            let chunk =
                chunk.map_err(|e| ApiError::MalformedBody(format!("Invalid form data: {}", e)))?;
            bytes.extend_from_slice(&chunk);
        }

        match filename {
            Some(filename) => {
                uploads
                    .store(&filename, content_type.as_deref(), &bytes)
                    .await
                    .context("Failed to store the uploaded files.")?;
            }
            None if name.is_empty() => {}
            None => {
                let value = String::from_utf8(bytes)
                    .map_err(|_| ValidationError::InvalidFieldEncoding(name.clone()))?;
                fields.insert(name, value);
            }
        }
    }
    Ok(fields)
}
