//! Receivers registered by the authenticated user.

mod api;
mod model;

pub use api::ReceiversApi;
pub use model::*;
