use thiserror::Error;

/// Errors raised by the trainers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainError {
    /// The configured activation kind is not one we know how to evaluate.
    /// Raised per forward pass, not at construction.
    #[error("unsupported activation function '{0}'")]
    UnsupportedActivation(String),

    /// A vector did not have the length a layer expects.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Mean loss and accuracy are undefined over zero examples.
    #[error("dataset is empty")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, TrainError>;

/// Errors raised while loading datasets and configuration files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("unknown fruit '{0}' (expected apple, banana, orange or 0-2)")]
    UnknownFruit(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no data rows found")]
    NoRows,
}
