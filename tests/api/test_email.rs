//! tests/api/test_email.rs

use crate::helpers::{spawn_app, spawn_app_with, Mail};

#[tokio::test]
async fn test_email_is_sent_through_the_configured_transport() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_test_email().await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Test email sent");

    let sent = app.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Subject: SMTP Test Successful"));
    assert!(sent[0].contains("Your email configuration is working!"));
}

#[tokio::test]
async fn test_email_reports_a_500_when_the_transport_refuses() {
    // Arrange
    let app = spawn_app_with(Mail::Refused, false).await;

    // Act
    let response = app.get_test_email().await;

    // Assert
    assert_eq!(500, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to send the test email.");
}
