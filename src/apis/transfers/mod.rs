//! Account-to-account transfers and their payment lifecycle.

mod api;
mod model;

pub use api::TransfersApi;
pub use model::*;
