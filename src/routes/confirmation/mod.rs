//! src/routes/confirmation/mod.rs

use actix_web::Responder;
use askama_actix::Template;

#[derive(Template)]
#[template(path = "confirmation.html")]
struct ConfirmationTemplate {}

pub async fn confirmation() -> impl Responder {
    ConfirmationTemplate {}
}
