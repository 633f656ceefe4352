//! Error handling for `medpanel`.

use thiserror::Error;

/// Specialized error type for panel generation and analysis
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    /// A malformed argument: counts below 1, an unknown column name,
    /// or a cluster count outside the supported range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// An operation was invoked on a panel with zero rows
    #[error("Empty input: {0}")]
    EmptyInput(String),
    /// Too few rows, or degenerate variance, for a statistical operation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

/// Result type for `medpanel` operations
pub type Result<T> = std::result::Result<T, PanelError>;
