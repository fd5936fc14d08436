use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Malformed stream line: {0}")]
    MalformedLine(String),

    #[error("Unknown stream part prefix: {0}")]
    UnknownPrefix(String),

    #[error("Invalid payload for stream part {prefix}: {source}")]
    InvalidPayload {
        prefix: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode stream part: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StreamResult<T> = Result<T, StreamError>;
