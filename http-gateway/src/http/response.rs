use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use model::interaction::InteractionResponse;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;
use tracing::error;

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    error: Box<str>,
}

impl ErrorResponse {
    pub fn new(error: &str) -> ErrorResponse {
        ErrorResponse {
            error: Box::from(error),
        }
    }
}

#[derive(Debug)]
pub struct FileUpload {
    pub filename: Box<str>,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

/// What the gateway sends back to Discord for a verified interaction.
#[derive(Debug)]
pub enum Reply {
    Json(InteractionResponse),
    // Files can only be sent alongside the response as multipart/form-data. The response JSON
    // then travels in the `payload_json` part, and must reference the file in `attachments`.
    WithFile(InteractionResponse, FileUpload),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(response) => Json(response).into_response(),
            Reply::WithFile(response, file) => match multipart_body(&response, &file) {
                Ok((content_type, body)) => {
                    ([(header::CONTENT_TYPE, content_type)], body).into_response()
                }
                Err(e) => {
                    error!(error = %e, "Failed to encode interaction response");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
        }
    }
}

fn multipart_body(
    response: &InteractionResponse,
    file: &FileUpload,
) -> Result<(HeaderValue, Vec<u8>), serde_json::Error> {
    let payload = serde_json::to_vec(response)?;
    let boundary = generate_boundary();

    let mut body = Vec::with_capacity(payload.len() + file.data.len() + 256);

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"payload_json\"\r\n");
    body.extend_from_slice(b"Content-Type: application/json\r\n\r\n");
    body.extend_from_slice(&payload);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"files[0]\"; filename=\"{}\"\r\n",
            file.filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", file.content_type).as_bytes());
    body.extend_from_slice(&file.data);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    // The boundary is plain alphanumerics, so this cannot fail
    let content_type = HeaderValue::from_str(&format!("multipart/form-data; boundary={}", boundary))
        .unwrap_or_else(|_| HeaderValue::from_static("multipart/form-data"));

    Ok((content_type, body))
}

fn generate_boundary() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    format!("interaction-{}", suffix)
}
