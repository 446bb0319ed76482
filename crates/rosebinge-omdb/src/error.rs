use thiserror::Error;

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("request to OMDb failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OMDb returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode OMDb payload: {0}")]
    Decode(#[from] serde_json::Error),
}
