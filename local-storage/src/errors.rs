use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage: quota of {quota} bytes exceeded, write of {needed} bytes refused")]
    QuotaExceeded { needed: u64, quota: u64 },

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("IO: {0}")]
    IO(#[from] std::io::Error),
}
