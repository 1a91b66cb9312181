//! src/startup.rs

use crate::configuration::Settings;
use crate::email_client::EmailClient;
use crate::error::ApiError;
use crate::routes::{
    application_form, confirmation, health_check, home, send_application_email, test_email,
    verify_payment,
};
use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(
        configuration: Settings,
        email_client: EmailClient,
    ) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, configuration)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Address shown to applicants who need help.
pub struct ContactEmail(pub String);

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    configuration: Settings,
) -> Result<Server, anyhow::Error> {
    let email_client = Data::new(email_client);
    let payment_client = Data::new(configuration.payment.client()?);
    let payment_settings = Data::new(configuration.payment);
    let upload_settings = Data::new(configuration.uploads);
    let contact_email = Data::new(ContactEmail(configuration.email.sender_email));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::MalformedBody(err.to_string()).into()
            }))
            .route("/", web::get().to(home))
            .route("/apply", web::get().to(application_form))
            .route("/confirmation", web::get().to(confirmation))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route(
                        "/send-application-email",
                        web::post().to(send_application_email),
                    )
                    .route("/verify-payment", web::post().to(verify_payment))
                    .route("/test-email", web::get().to(test_email)),
            )
            .app_data(email_client.clone())
            .app_data(payment_client.clone())
            .app_data(payment_settings.clone())
            .app_data(upload_settings.clone())
            .app_data(contact_email.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
