use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebflowError {
    #[error("Webflow credentials not configured")]
    MissingCredentials,

    #[error("invalid blog URL: {0}")]
    InvalidUrl(String),

    #[error("invalid API token")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("Webflow API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, WebflowError>;
