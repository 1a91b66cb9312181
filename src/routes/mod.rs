//! src/routes/mod.rs

mod api;
mod apply;
mod confirmation;
mod health_check;
mod home;

pub use api::*;
pub use apply::*;
pub use confirmation::*;
pub use health_check::*;
pub use home::*;
