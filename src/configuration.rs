//! src/configuration.rs

use crate::email_client::{EmailClient, MailTransport};
use crate::payment_client::PaystackClient;
use anyhow::Context;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;
use std::time::Duration;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
    pub payment: PaymentSettings,
    pub uploads: UploadSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub sender_email: String,
    pub sender_name: String,
    pub admin_email: String,
    /// TLS from the first byte (port 465) instead of STARTTLS
    pub implicit_tls: bool,
    pub accept_invalid_certs: bool,
    pub timeout_milliseconds: u64,
}

impl EmailSettings {
    pub fn sender(&self) -> anyhow::Result<Mailbox> {
        let address = self
            .sender_email
            .parse()
            .with_context(|| format!("`{}` is not a valid sender email.", self.sender_email))?;
        Ok(Mailbox::new(Some(self.sender_name.clone()), address))
    }

    pub fn admin(&self) -> anyhow::Result<Mailbox> {
        self.admin_email
            .parse()
            .with_context(|| format!("`{}` is not a valid admin email.", self.admin_email))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// Build the SMTP transport described by these settings.
    pub fn transport(&self) -> anyhow::Result<MailTransport> {
        let tls_parameters = TlsParameters::builder(self.host.clone())
            .dangerous_accept_invalid_certs(self.accept_invalid_certs)
            .build()
            .context("Failed to build TLS parameters for the SMTP transport.")?;
        let tls = if self.implicit_tls {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Required(tls_parameters)
        };
        let credentials = Credentials::new(
            self.username.clone(),
            self.password.expose_secret().clone(),
        );
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.host)
            .port(self.port)
            .tls(tls)
            .credentials(credentials)
            .timeout(Some(self.timeout()))
            .build();
        Ok(MailTransport::Smtp(transport))
    }

    pub fn client(&self) -> anyhow::Result<EmailClient> {
        Ok(EmailClient::new(
            self.transport()?,
            self.sender()?,
            self.admin()?,
        ))
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct PaymentSettings {
    pub base_url: String,
    pub secret_key: Secret<String>,
    pub public_key: String,
    /// application fee in kobo
    pub application_fee_kobo: u64,
    /// answer verification requests locally without calling the provider
    pub mock_verification: bool,
    pub timeout_milliseconds: u64,
}

impl PaymentSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> anyhow::Result<PaystackClient> {
        PaystackClient::new(self.base_url.clone(), self.secret_key.clone(), self.timeout())
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct UploadSettings {
    pub temp_dir: PathBuf,
}

/// The possible runtime environment for our application.
#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_EMAIL__PASSWORD=...` would set `Settings.email.password`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
