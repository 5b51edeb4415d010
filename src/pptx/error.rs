/// Error types for PPTX document generation.
use crate::opc::error::OpcError;
use thiserror::Error;

/// Errors that can occur while building or saving a presentation.
#[derive(Error, Debug)]
pub enum PptxError {
    /// Error from the underlying OPC package layer
    #[error("Package error: {0}")]
    Opc(#[from] OpcError),

    /// Error during XML generation
    #[error("XML generation error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for PptxError {
    fn from(err: std::fmt::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}

/// Result type alias for PPTX operations.
pub type Result<T> = std::result::Result<T, PptxError>;
