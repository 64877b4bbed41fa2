use crate::http::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::{io, net};
use tracing::error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid request signature")]
    InvalidSignature,

    #[error("invalid request body")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("unknown interaction type {0}")]
    UnknownInteractionType(u64),

    #[error("unknown command \"{0}\"")]
    UnknownCommand(Box<str>),

    #[error("target message is missing from the resolved data")]
    MissingTargetMessage,

    #[error("invalid ed25519 public key: {0}")]
    InvalidPublicKey(String),

    #[error("error while loading config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("error occurred during I/O operation: {0}")]
    IoError(#[from] io::Error),

    #[error("error while performing HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Discord returned status {status}: {body}")]
    ResponseError { status: u16, body: String },
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidSignature => StatusCode::UNAUTHORIZED,
            Error::MalformedPayload(..)
            | Error::UnknownInteractionType(..)
            | Error::UnknownCommand(..)
            | Error::MissingTargetMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        match self {
            // Don't give away why verification failed
            Error::InvalidSignature => (status_code, self.to_string()).into_response(),
            e if status_code.is_server_error() => {
                error!(error = %e, "Error while handling interaction");
                let body = ErrorResponse::new("internal server error");
                (status_code, Json(body)).into_response()
            }
            e => (status_code, Json(ErrorResponse::new(&e.to_string()))).into_response(),
        }
    }
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
