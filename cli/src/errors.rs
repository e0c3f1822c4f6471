use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Soapbox: {0}")]
    Soapbox(#[from] soapbox::errors::Error),

    #[error("Upload: {0}")]
    Upload(#[from] upload_api::errors::Error),

    #[error("Address: {0}")]
    Address(#[from] social_data::address::AddressError),

    #[error("Storage: {0}")]
    Storage(#[from] local_storage::errors::Error),

    #[error("IO: {0}")]
    IO(#[from] std::io::Error),
}
