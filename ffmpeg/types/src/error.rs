/*!
    Error types for the ffmpeg filter crates.
*/

use thiserror::Error;

use crate::PixelFormat;

/**
    Error type for the ffmpeg filter crates.

    Every failure is local and reported straight to the caller,
    stages never retry on their own.
*/
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An output frame or one of its plane buffers could not be obtained
    #[error("failed to allocate {bytes} bytes for frame buffer")]
    Allocation { bytes: usize },
    /// Consume, push or request failed at a link boundary
    #[error("link error: {message}")]
    Link { message: String },
    /// A stage was configured with options it cannot accept
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
    /// Valid frame, but in a format the stage does not handle
    #[error("unsupported pixel format: {format:?}")]
    UnsupportedFormat { format: PixelFormat },
    /// Malformed frame or time base
    #[error("invalid data: {message}")]
    InvalidData { message: String },
    /// End of stream (a closed link or a completed stage was handed a frame)
    #[error("end of stream")]
    Eof,
}

impl Error {
    /**
        Create an allocation error for a request of `bytes` bytes.
    */
    pub fn allocation(bytes: usize) -> Self {
        Self::Allocation { bytes }
    }

    /**
        Create a link error with the given message.
    */
    pub fn link(message: impl Into<String>) -> Self {
        Self::Link {
            message: message.into(),
        }
    }

    /**
        Create an invalid configuration error with the given message.
    */
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /**
        Create an invalid data error with the given message.
    */
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /**
        Returns true if this is an EOF error.
    */
    pub fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /**
        Returns true if this is an allocation failure.
    */
    pub fn is_allocation(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

/**
    Result type alias for the ffmpeg filter crates.
*/
pub type Result<T> = std::result::Result<T, Error>;
