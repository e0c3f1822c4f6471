pub mod errors;

use std::{path::Path, sync::Arc, time::SystemTime};

use errors::{Error, UploadError};

use reqwest::{
    multipart::{Form, Part},
    Client, Url,
};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

type Result<T> = std::result::Result<T, Error>;

/// Media types the endpoint accepts.
pub const ALLOWED_TYPES: [&str; 7] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "video/mp4",
    "video/webm",
    "video/quicktime",
];

pub fn allowed_type(mime_type: &str) -> bool {
    ALLOWED_TYPES.contains(&mime_type)
}

/// Collision-resistant stored name; unique token + timestamp + original extension.
pub fn storage_filename(original: &str) -> String {
    let timestamp = match SystemTime::now().duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_secs(),
        Err(_) => 0,
    };

    match Path::new(original).extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}_{}.{}", Uuid::new_v4().simple(), timestamp, ext),
        None => format!("{}_{}", Uuid::new_v4().simple(), timestamp),
    }
}

/// JSON body of a successful upload.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
pub struct UploadResponse {
    pub success: bool,

    /// Public URL the stored file is served back from.
    pub url: String,

    pub filename: String,
}

#[derive(Clone)]
pub struct UploadService {
    client: Client,
    endpoint: Arc<Url>,
}

impl UploadService {
    pub fn new(endpoint: Url) -> Self {
        let endpoint = Arc::from(endpoint);

        let client = Client::new();

        Self { client, endpoint }
    }

    /// POST this file as multipart form data under the `file` field.
    pub async fn upload(&self, path: &Path) -> Result<UploadResponse> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_owned();

        let mime_type = mime_guess::from_path(path).first_or_octet_stream();

        let data = tokio::fs::read(path).await?;

        let part = Part::bytes(data)
            .file_name(file_name)
            .mime_str(mime_type.essence_str())?;

        let form = Form::new().part("file", part);

        let bytes = self
            .client
            .post(self.endpoint.as_ref().clone())
            .multipart(form)
            .send()
            .await?
            .bytes()
            .await?;

        if let Ok(res) = serde_json::from_slice::<UploadResponse>(&bytes) {
            return Ok(res);
        }

        let error = serde_json::from_slice::<UploadError>(&bytes)?;

        Err(error.into())
    }
}
