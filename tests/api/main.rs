//! tests/api/main.rs

mod health_check;
mod helpers;
mod pages;
mod test_email;
