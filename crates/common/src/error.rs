//! Error types shared across Focal crates.

/// Top-level error type for Focal operations.
#[derive(Debug, thiserror::Error)]
pub enum FocalError {
    #[error(
        "Invalid image shape: {width}x{height} needs {expected} RGBA bytes, buffer has {actual}"
    )]
    InvalidImageShape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("No blocks to select from")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FocalError.
pub type FocalResult<T> = Result<T, FocalError>;

impl FocalError {
    /// Shape error for a `width x height` RGBA image backed by `actual` bytes.
    pub fn invalid_shape(width: u32, height: u32, actual: usize) -> Self {
        Self::InvalidImageShape {
            width,
            height,
            expected: rgba_len(width, height),
            actual,
        }
    }

    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: msg.into(),
        }
    }

    /// Whether the caller can recover by supplying a different image.
    pub fn is_image_error(&self) -> bool {
        matches!(self, Self::InvalidImageShape { .. })
    }
}

/// Number of bytes in a tightly packed RGBA image.
pub fn rgba_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}
