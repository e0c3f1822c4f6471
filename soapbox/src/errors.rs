use social_data::{MAX_BIO_CHARS, MAX_CONTENT_CHARS, MAX_DISPLAY_NAME_CHARS, MIN_DISPLAY_NAME_CHARS};

use thiserror::Error;

use crate::wallet::WalletError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Soapbox: No wallet connected")]
    NotConnected,

    #[error("Soapbox: Content cannot be empty")]
    EmptyContent,

    #[error("Soapbox: Content cannot exceed {MAX_CONTENT_CHARS} characters")]
    ContentTooLong,

    #[error("Soapbox: Display name must be {MIN_DISPLAY_NAME_CHARS} to {MAX_DISPLAY_NAME_CHARS} characters")]
    DisplayName,

    #[error("Soapbox: Bio cannot exceed {MAX_BIO_CHARS} characters")]
    Bio,

    #[error("Soapbox: Cannot embed file, please use a supported media type")]
    MediaType,

    #[error("Soapbox: Cannot embed file, 2 MiB limit exceeded")]
    MediaSize,

    #[error("Address: {0}")]
    Address(#[from] social_data::address::AddressError),

    #[error("Parse: {0}")]
    Parse(#[from] url::ParseError),

    #[error("Wallet: {0}")]
    Wallet(#[from] WalletError),

    #[error("Storage: {0}")]
    Storage(#[from] local_storage::errors::Error),

    #[error("IO: {0}")]
    IO(#[from] std::io::Error),
}
