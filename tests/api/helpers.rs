//! tests/api/helpers.rs

use admission_portal::configuration::get_configuration;
use admission_portal::email_client::{EmailClient, MailTransport};
use admission_portal::startup::Application;
use admission_portal::telemetry::{get_subscriber, init_subscriber};
use lettre::transport::stub::AsyncStubTransport;
use once_cell::sync::Lazy;
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // We cannot assign the output of `get_subscriber` to a variable based on the
    // value TEST_LOG` because the sink is part of the type returned by
    // `get_subscriber`, therefore they are not the same type.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

/// How the stand-in mail transport should behave.
pub enum Mail {
    Delivered,
    Refused,
}

pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// stands in for the Paystack API
    pub payment_server: MockServer,
    /// records every message handed to the mail transport
    pub mail_log: AsyncStubTransport,
    pub upload_dir: PathBuf,
    pub application_fee_kobo: u64,
    // keeps the upload directory alive for the lifetime of the test
    _upload_root: TempDir,
}

impl TestApp {
    pub async fn post_application(&self, form: Form) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/send-application-email", &self.address))
            .multipart(form)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_verify_payment(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/verify-payment", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_test_email(&self) -> reqwest::Response {
        self.get_response_from_url("/api/test-email").await
    }

    /// helper to get Response from url
    pub async fn get_response_from_url(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_html(&self, path: &str) -> String {
        self.get_response_from_url(path).await.text().await.unwrap()
    }

    /// Raw messages handed to the mail transport so far.
    pub async fn sent_emails(&self) -> Vec<String> {
        self.mail_log
            .messages()
            .await
            .into_iter()
            .map(|(_, raw)| raw)
            .collect()
    }

    /// Files left in the upload directory.
    pub fn leftover_uploads(&self) -> Vec<PathBuf> {
        match std::fs::read_dir(&self.upload_dir) {
            Ok(entries) => entries.map(|entry| entry.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Text fields of a complete application.
pub fn application_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Amara"),
        ("middleName", "Ngozi"),
        ("lastName", "Okafor"),
        ("dob", "2004-03-12"),
        ("gender", "Female"),
        ("email", "amara.okafor@example.com"),
        ("phone", "08031234567"),
        ("desiredCourse", "Computer Science"),
        ("studyMode", "full-time"),
        ("agreeTerms", "true"),
        ("signature", "Amara Okafor"),
        ("paymentMethod", "paystack"),
        ("paymentReference", "1712345678901"),
        ("paymentVerified", "true"),
    ]
}

pub fn application_form() -> Form {
    form_from(application_fields())
}

pub fn form_from(fields: Vec<(&'static str, &'static str)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value))
}

pub fn file_part(filename: &'static str, mime: &str, bytes: &[u8]) -> Part {
    Part::bytes(bytes.to_vec())
        .file_name(filename)
        .mime_str(mime)
        .unwrap()
}

/// Spin up an instance of our application with a working mail transport.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Mail::Delivered, false).await
}

/// Spin up an instance of our application
/// and returns its address (i.e. http://localhost:XXXX)
pub async fn spawn_app_with(mail: Mail, mock_verification: bool) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    // Launch a mock server to stand in for Paystack's API
    let payment_server = MockServer::start().await;
    let upload_root = tempfile::tempdir().expect("Failed to create upload directory.");
    let upload_dir = upload_root.path().join("temp-uploads");

    // Randomise configuration to ensure test isolation
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // use a random OS port
        c.application.port = 0;
        c.payment.base_url = payment_server.uri();
        c.payment.mock_verification = mock_verification;
        c.uploads.temp_dir = upload_dir.clone();
        c
    };

    let mail_log = match mail {
        Mail::Delivered => AsyncStubTransport::new_ok(),
        Mail::Refused => AsyncStubTransport::new_error(),
    };
    let email_client = EmailClient::new(
        MailTransport::Stub(mail_log.clone()),
        configuration.email.sender().unwrap(),
        configuration.email.admin().unwrap(),
    );
    let application_fee_kobo = configuration.payment.application_fee_kobo;

    let application = Application::build(configuration, email_client)
        .await
        .expect("Failed to build application");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", application_port),
        api_client: reqwest::Client::new(),
        payment_server,
        mail_log,
        upload_dir,
        application_fee_kobo,
        _upload_root: upload_root,
    }
}
