use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serde: {0}")]
    Serde(#[from] serde_json::error::Error),

    #[error("Reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Upload: {0}")]
    Upload(#[from] UploadError),

    #[error("Parse: {0}")]
    Parse(#[from] url::ParseError),

    #[error("IO: {0}")]
    IO(#[from] std::io::Error),
}

/// JSON error body the endpoint answers rejections with.
#[derive(Serialize, Deserialize, Debug)]
pub struct UploadError {
    pub error: String,
}

impl std::error::Error for UploadError {}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}
