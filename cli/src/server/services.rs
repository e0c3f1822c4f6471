use std::path::{Path, PathBuf};

use hyper::{
    header::{
        HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
        ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HOST,
    },
    Body, Method, Request, Response, StatusCode,
};

use serde_json::json;

use upload_api::{allowed_type, storage_filename, UploadResponse};

pub async fn requests(
    req: Request<Body>,
    uploads: PathBuf,
) -> Result<Response<Body>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let res = match (method, path.as_str()) {
        // CORS preflight, any origin.
        (Method::OPTIONS, _) => status_response(StatusCode::OK),
        (Method::GET, path) if path.starts_with("/uploads/") => {
            file_response(&uploads, &path["/uploads/".len()..]).await
        }
        (Method::POST, _) => upload_response(req, &uploads).await,
        _ => error_response(StatusCode::BAD_REQUEST, "Method not allowed"),
    };

    Ok(with_cors(res))
}

async fn upload_response(req: Request<Body>, uploads: &Path) -> Response<Body> {
    let (parts, body) = req.into_parts();

    let host = parts
        .headers
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost")
        .to_owned();

    let boundary = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| multer::parse_boundary(value).ok());

    let boundary = match boundary {
        Some(boundary) => boundary,
        None => {
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded or upload error")
        }
    };

    let mut multipart = multer::Multipart::new(body, boundary);

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) | Err(_) => {
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded or upload error")
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        let mime_type = match field.content_type() {
            Some(mime_type) => mime_type.essence_str().to_owned(),
            None => return error_response(StatusCode::BAD_REQUEST, "File type not allowed"),
        };

        if !allowed_type(&mime_type) {
            return error_response(StatusCode::BAD_REQUEST, "File type not allowed");
        }

        let original = field.file_name().unwrap_or("file").to_owned();

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(_) => {
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded or upload error")
            }
        };

        if let Err(e) = tokio::fs::create_dir_all(uploads).await {
            eprintln!("Service: {:#?}", e);

            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create upload directory",
            );
        }

        let filename = storage_filename(&original);

        if let Err(e) = tokio::fs::write(uploads.join(&filename), &data).await {
            eprintln!("Service: {:#?}", e);

            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save file");
        }

        let url = format!("http://{}/uploads/{}", host, filename);

        return json_response(
            StatusCode::OK,
            &UploadResponse {
                success: true,
                url,
                filename,
            },
        );
    }
}

/// Serve a stored upload back with its guessed media type.
async fn file_response(uploads: &Path, filename: &str) -> Response<Body> {
    // Flat names only, no path tricks.
    if filename.contains('/') || filename.contains("..") {
        return error_response(StatusCode::BAD_REQUEST, "Invalid filename");
    }

    let path = uploads.join(filename);

    let data = match tokio::fs::read(&path).await {
        Ok(data) => data,
        Err(_) => return error_response(StatusCode::NOT_FOUND, "File not found"),
    };

    let mime_type = mime_guess::from_path(&path).first_or_octet_stream();

    let mut res = Response::new(Body::from(data));

    if let Ok(value) = HeaderValue::from_str(mime_type.essence_str()) {
        res.headers_mut().insert(CONTENT_TYPE, value);
    }

    res
}

fn with_cors(mut res: Response<Body>) -> Response<Body> {
    let headers = res.headers_mut();

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );

    res
}

fn status_response(status: StatusCode) -> Response<Body> {
    let mut res = Response::new(Body::empty());

    *res.status_mut() = status;

    res
}

fn error_response(status: StatusCode, message: &str) -> Response<Body> {
    json_response(status, &json!({ "error": message }))
}

fn json_response<T>(status: StatusCode, body: &T) -> Response<Body>
where
    T: ?Sized + serde::Serialize,
{
    let json = match serde_json::to_string(body) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Service: {:#?}", e);

            return status_response(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let mut res = Response::new(Body::from(json));

    *res.status_mut() = status;

    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    res
}
