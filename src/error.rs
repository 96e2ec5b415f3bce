// vision-overlay 🦀 MIT OR Apache-2.0 License

//! Error types for the overlay library.

use std::fmt;

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for the overlay library.
#[derive(Debug)]
pub enum OverlayError {
    /// Image layout unsuitable for the operation (wrong channels, size mismatch).
    ImageError(String),
    /// Malformed pose data (wrong keypoint count, bad array shape).
    PoseError(String),
    /// Font resolution or parsing error.
    FontError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::PoseError(msg) => write!(f, "Pose error: {msg}"),
            Self::FontError(msg) => write!(f, "Font error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
