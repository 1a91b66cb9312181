//! src/routes/apply/mod.rs

use actix_web::{web, Responder};
use askama_actix::Template;

use crate::configuration::PaymentSettings;
use crate::domain::form_layout::{self, FormSection};

#[derive(Template)]
#[template(path = "apply.html")]
struct ApplyTemplate {
    sections: &'static [FormSection],
    step_count: usize,
    paystack_public_key: String,
    application_fee_kobo: u64,
    application_fee: String,
}

/// The admission wizard.
pub async fn application_form(payment_settings: web::Data<PaymentSettings>) -> impl Responder {
    ApplyTemplate {
        sections: form_layout::SECTIONS,
        step_count: form_layout::step_count(),
        paystack_public_key: payment_settings.public_key.clone(),
        application_fee_kobo: payment_settings.application_fee_kobo,
        application_fee: format_naira(payment_settings.application_fee_kobo),
    }
}

/// `2000000` kobo -> `₦20,000`
fn format_naira(kobo: u64) -> String {
    let naira = (kobo / 100).to_string();
    let mut grouped = String::new();
    for (i, digit) in naira.chars().enumerate() {
        if i > 0 && (naira.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    match kobo % 100 {
        0 => format!("₦{}", grouped),
        rest => format!("₦{}.{:02}", grouped, rest),
    }
}
