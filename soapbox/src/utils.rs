use std::path::Path;

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};

use crate::errors::Error;

/// Largest file worth embedding inline; bigger media should be uploaded instead.
pub const MAX_EMBED_BYTES: u64 = 2 * 1024 * 1024;

/// Read a local file into a `data:<mime>;base64,<payload>` URL.
pub fn to_data_url(path: &Path) -> Result<String, Error> {
    let mime_type = match mime_guess::from_path(path).first_raw() {
        Some(mime_type) => mime_type,
        None => return Err(Error::MediaType),
    };

    if std::fs::metadata(path)?.len() > MAX_EMBED_BYTES {
        return Err(Error::MediaSize);
    }

    let data = std::fs::read(path)?;

    let mut data_url = String::from("data:");

    data_url.push_str(mime_type);
    data_url.push_str(";base64,");
    data_url.push_str(&B64.encode(data));

    Ok(data_url)
}
