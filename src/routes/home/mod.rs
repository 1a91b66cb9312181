//! src/routes/home/mod.rs

use actix_web::{web, Responder};
use askama_actix::Template;

use crate::startup::ContactEmail;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    contact_email: String,
}

pub async fn home(contact_email: web::Data<ContactEmail>) -> impl Responder {
    HomeTemplate {
        contact_email: contact_email.0.clone(),
    }
}
