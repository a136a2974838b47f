// Common error types for xcgen

use thiserror::Error;

#[derive(Debug, Error)]
pub enum XcgenError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Patch error: {0}")]
    PatchError(String),
}

pub type Result<T> = std::result::Result<T, XcgenError>;
