//! tests/api/pages.rs

use crate::helpers::spawn_app;
use scraper::{Html, Selector};

#[tokio::test]
async fn home_page_links_to_the_application_form() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_response_from_url("/").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let document = Html::parse_document(&response.text().await.unwrap());
    let selector = Selector::parse("a#apply").unwrap();
    let link = document.select(&selector).next().expect("No apply link");
    assert_eq!(link.value().attr("href"), Some("/apply"));
}

#[tokio::test]
async fn home_page_shows_the_contact_address() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let html = app.get_html("/").await;

    // Assert
    assert!(html.contains("mailto:admission@riverdaleedu.ng"));
}

#[tokio::test]
async fn application_form_renders_every_step_and_the_fee() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let html = app.get_html("/apply").await;

    // Assert
    let document = Html::parse_document(&html);
    for name in ["firstName", "lastName", "email", "photo", "agreeTerms"] {
        let selector = Selector::parse(&format!("[name=\"{}\"]", name)).unwrap();
        assert!(
            document.select(&selector).next().is_some(),
            "The form has no input named {}.",
            name
        );
    }
    assert!(html.contains("of 8"));
    assert!(html.contains("₦20,000"));
}

#[tokio::test]
async fn confirmation_page_links_back_home() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.get_response_from_url("/confirmation").await;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let document = Html::parse_document(&response.text().await.unwrap());
    let selector = Selector::parse("a#home").unwrap();
    let link = document.select(&selector).next().expect("No home link");
    assert_eq!(link.value().attr("href"), Some("/"));
}
