use thiserror::Error;

/// Fatal errors. Anything here aborts the whole run; per-record lookup
/// problems are `LookupFailure` and never become an `EnrichError`.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("Data format error: {message}")]
    DataFormat { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Why a single lookup produced no image. Every variant collapses to a
/// null `image` in the output; they differ only in logged diagnostics.
#[derive(Error, Debug, Clone)]
pub enum LookupFailure {
    #[error("no page matches the title")]
    NotFound,

    #[error("page exists but has no thumbnail")]
    NoThumbnail,

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, EnrichError>;
