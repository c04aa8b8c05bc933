//! Error types for I/O operations.
//!
//! Provides unified error handling for decode, normalization and encode.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported or unrecognized format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Unsupported bit depth or color-type combination.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Channel count outside the 1..=4 range the normalizer handles.
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u32),

    /// Invalid image dimensions.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
