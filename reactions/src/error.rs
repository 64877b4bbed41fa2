use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Error while sending HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Discord returned status {status}: {body}")]
    ResponseError { status: u16, body: String },

    #[error("Discord returned a falsy response")]
    FalsyResponse,

    #[error("Error while decoding reaction users: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl<T> From<FetchError> for Result<T> {
    fn from(e: FetchError) -> Self {
        Err(e)
    }
}
