//! Rust client for the [Slick-Pay](https://slick-pay.com) transfer APIs:
//! bank accounts, receivers and account-to-account transfers.
//!
//! Every method validates its parameters locally, issues a single
//! authenticated HTTP call and normalizes the outcome into a
//! [`Result`](std::result::Result) carrying either the endpoint's response
//! projection or an [`Error`](crate::error::Error) with the ordered list of
//! failure messages. The client never retries; retry policy belongs to the
//! caller.
//!
//! # Usage
//!
//! ## Initialize a new `TransferClient`
//!
//! Create a new [`TransferClient`](crate::client::TransferClient) with the
//! public key of your Slick-Pay account.
//!
//! ```rust,no_run
//! use slickpay_transfer::TransferClient;
//!
//! let client = TransferClient::new("my-public-key");
//! ```
//!
//! By default, a `TransferClient` connects to the Slick-Pay sandbox.
//! To go live, use
//! [`with_environment(Environment::Production)`](crate::client::TransferClientBuilder::with_environment).
//!
//! ## Register a bank account
//!
//! ```rust,no_run
//! # use slickpay_transfer::{TransferClient, Error};
//! # use slickpay_transfer::apis::bank_accounts::BankAccountRequestBuilder;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: TransferClient = unreachable!();
//! let request = BankAccountRequestBuilder::default()
//!     .title("Company account")
//!     .fname("Jane")
//!     .lname("Doe")
//!     .rib("12345678901234567890")
//!     .address("12 Didouche Mourad, Algiers")
//!     .build()
//!     .unwrap();
//!
//! let account = client.bank_accounts.create(&request).await?;
//! println!("created bank account: {}", account);
//! # Ok(())
//! # }
//! ```
//!
//! ## Initiate a payment
//!
//! ```rust,no_run
//! # use slickpay_transfer::{TransferClient, Error};
//! # use slickpay_transfer::apis::transfers::{CreatePaymentRequestBuilder, TransferType};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: TransferClient = unreachable!();
//! let request = CreatePaymentRequestBuilder::default()
//!     .amount(5000.0)
//!     .receiver_uuid("9a6fc51a-... receiver uuid ...")
//!     .transfer_type(TransferType::External)
//!     .build()
//!     .unwrap();
//!
//! let payment = client.transfers.create_payment(&request).await?;
//! println!("redirect the payer to: {}", payment.redirect_url);
//!
//! let status = client.transfers.payment_status(payment.transfer_id).await?;
//! println!("payment status: {:?}", status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspect failures
//!
//! Any failure, local or remote, surfaces as an [`Error`] whose
//! [`messages`](crate::error::Error::messages) method returns the ordered,
//! human-readable causes:
//!
//! ```rust,no_run
//! # use slickpay_transfer::TransferClient;
//! # #[tokio::main]
//! # async fn main() {
//! # let client: TransferClient = unreachable!();
//! if let Err(e) = client.bank_accounts.list(0).await {
//!     for message in e.messages() {
//!         eprintln!("{}", message);
//!     }
//! }
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::TransferClient;
pub use error::Error;
