//! src/routes/api/mod.rs

mod send_application_email;
mod test_email;
mod verify_payment;

pub use send_application_email::*;
pub use test_email::*;
pub use verify_payment::*;
