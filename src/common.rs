use std::time::Duration;

// Default base URLs
pub static DEFAULT_PRODUCTION_URL: &str = "https://transfer.slick-pay.com";
pub static DEFAULT_SANDBOX_URL: &str = "https://dev.transfer.slick-pay.com";

// Fixed envelope messages
pub static MISSING_PUBLIC_KEY_MESSAGE: &str =
    "You have to set a public key, from your config file.";
pub static REMOTE_FAILURE_MESSAGE: &str = "Error ! Please, try later";

// Per-request timeouts
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
