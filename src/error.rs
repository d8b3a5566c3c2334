//! Error types for binviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in binviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or chart canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Rejected chart configuration (inverted domain, bad bin edges, etc.).
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Scale domain error (e.g., log of non-positive value).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig("x domain min 5 >= max 2".to_string());
        assert!(err.to_string().contains("x domain"));
    }

    #[test]
    fn test_scale_domain_display() {
        let err = Error::ScaleDomain("log scale requires positive domain".to_string());
        assert!(err.to_string().contains("positive"));
    }
}
