//! Error types for Journeymap

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JourneyError {
    // Dataset errors
    #[error("Dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Failed to parse dataset {path}: {reason}")]
    DatasetParse { path: PathBuf, reason: String },

    #[error("Dataset failed validation with {} error(s): {}", .errors.len(), .errors.join("; "))]
    InvalidDataset { errors: Vec<String> },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, JourneyError>;
