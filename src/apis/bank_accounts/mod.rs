//! Bank accounts owned by the authenticated user.

mod api;
mod model;

pub use api::BankAccountsApi;
pub use model::*;
