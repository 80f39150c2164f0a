use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request to content store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("content store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid content store url: {0}")]
    Url(#[from] url::ParseError),
}
