use std::time::Duration;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Video failed to load: {reason}")]
    Load { reason: String },

    #[error("Seek to {at_secs:.2}s failed: {reason}")]
    Seek { at_secs: f64, reason: String },

    #[error("Seek to {at_secs:.2}s did not land within {timeout:?}")]
    SeekTimeout { at_secs: f64, timeout: Duration },

    #[error("Frame encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Frame sampling failed: {0}")]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    ApiStatus { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid API response: {reason}")]
    InvalidResponse { reason: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
