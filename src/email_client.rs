//! src/email_client.rs

use crate::domain::ApplicantEmail;
use crate::uploads::{StoredUpload, DEFAULT_CONTENT_TYPE};
use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::stub::AsyncStubTransport;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

/// Outbound mail mechanism.
pub enum MailTransport {
    Smtp(AsyncSmtpTransport<Tokio1Executor>),
    /// Records messages instead of sending them.
    Stub(AsyncStubTransport),
}

impl MailTransport {
    async fn send(&self, message: Message) -> anyhow::Result<()> {
        match self {
            MailTransport::Smtp(transport) => {
                let response = transport
                    .send(message)
                    .await
                    .context("The SMTP server refused the message.")?;
                tracing::info!(smtp.code = %response.code(), "Message accepted by SMTP server");
            }
            MailTransport::Stub(transport) => transport
                .send(message)
                .await
                .context("The stub transport refused the message.")?,
        }
        Ok(())
    }
}

/// Everything needed to compose one email to the admissions office.
#[derive(Debug, Default)]
pub struct EmailContent {
    pub subject: String,
    pub text_body: String,
    pub html_body: Option<String>,
    pub reply_to: Option<ApplicantEmail>,
    pub attachments: Vec<StoredUpload>,
}

pub struct EmailClient {
    transport: MailTransport,
    sender: Mailbox,
    recipient: Mailbox,
}

impl EmailClient {
    pub fn new(transport: MailTransport, sender: Mailbox, recipient: Mailbox) -> Self {
        Self {
            transport,
            sender,
            recipient,
        }
    }

    /// Send `content` to the admissions office and return the `Message-ID`.
    #[tracing::instrument(
        name = "Send email",
        skip(self, content),
        fields(
            subject = %content.subject,
            attachments = content.attachments.len(),
            message_id = tracing::field::Empty
        )
    )]
    pub async fn send_email(&self, content: EmailContent) -> anyhow::Result<String> {
        let message_id = self.generate_message_id();
        tracing::Span::current().record("message_id", tracing::field::display(&message_id));
        let message = self.compose(content, message_id.clone()).await?;
        self.transport.send(message).await?;
        Ok(message_id)
    }

    fn generate_message_id(&self) -> String {
        format!("<{}@{}>", Uuid::new_v4(), self.sender.email.domain())
    }

    async fn compose(&self, content: EmailContent, message_id: String) -> anyhow::Result<Message> {
        let mut builder = Message::builder()
            .message_id(Some(message_id))
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .subject(content.subject);
        if let Some(reply_to) = content.reply_to {
            let mailbox: Mailbox = reply_to
                .as_ref()
                .parse()
                .with_context(|| format!("`{}` can not be used as reply-to address.", reply_to))?;
            builder = builder.reply_to(mailbox);
        }

        let message = if content.html_body.is_none() && content.attachments.is_empty() {
            builder
                .header(ContentType::TEXT_PLAIN)
                .body(content.text_body)
        } else {
            let mut mixed = match content.html_body {
                Some(html_body) => MultiPart::mixed().multipart(MultiPart::alternative_plain_html(
                    content.text_body,
                    html_body,
                )),
                None => MultiPart::mixed().singlepart(SinglePart::plain(content.text_body)),
            };
            for upload in &content.attachments {
                mixed = mixed.singlepart(read_attachment(upload).await?);
            }
            builder.multipart(mixed)
        };
        message.context("Failed to build the email message.")
    }
}

/// Attachments are read back from their temp path when the mail is composed.
async fn read_attachment(upload: &StoredUpload) -> anyhow::Result<SinglePart> {
    let bytes = tokio::fs::read(&upload.path)
        .await
        .with_context(|| format!("Failed to read attachment {}", upload.path.display()))?;
    let content_type = ContentType::parse(&upload.content_type)
        .or_else(|_| ContentType::parse(DEFAULT_CONTENT_TYPE))
        .context("Failed to determine attachment content type.")?;
    Ok(Attachment::new(upload.filename.clone()).body(bytes, content_type))
}
