//! Error types for marker construction

use thiserror::Error;

/// Errors reported while building markers
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VizError {
    /// Dimension, arity or range mismatch in caller-supplied input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl VizError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        VizError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, VizError>;
