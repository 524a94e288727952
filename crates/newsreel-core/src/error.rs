use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsreelError {
    #[error("News source unavailable for category '{category}': {reason}")]
    UpstreamUnavailable { category: String, reason: String },

    #[error("No usable news items for category '{category}'")]
    NoContent { category: String },

    #[error("Narration synthesis failed: {reason}")]
    Synthesis { reason: String },

    #[error("Required asset missing: {path}")]
    AssetMissing { path: PathBuf },

    #[error("Encoder failed: {reason}")]
    Encode { reason: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload failed: {reason}")]
    Upload { reason: String },

    #[error("Generation exceeded the {seconds}s wall-clock budget")]
    Timeout { seconds: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, NewsreelError>;
