use thiserror::Error;

/// A color string that is not `#` followed by 3, 6 or 8 hex digits.
///
/// Carries the input exactly as the caller passed it, before any `0x`
/// stripping or `#` prefixing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse color from \"{input}\"")]
pub struct FormatError {
    input: String,
}

impl FormatError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Buffer or frame geometry rejected by the BGRA conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Buffer is empty or its length is not a multiple of the pixel size.
    #[error("buffer length is not a whole number of pixels")]
    NotPixelAligned,
    /// Destination holds fewer pixels than the source.
    #[error("destination buffer is smaller than the source")]
    PixelCountMismatch,
    /// Zero dimensions, a stride shorter than a row, or a buffer too short
    /// for `height` rows at `stride`.
    #[error("invalid width, height or stride for the buffer")]
    InvalidStride,
}

/// Errors from encoding, decoding, resizing and frame conversion.
#[derive(Debug, Error)]
pub enum BitmapError {
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Size(#[from] SizeError),

    #[error("size multiplier cannot be less than zero, got {0}")]
    NegativeMultiplier(f64),

    #[error("dimensions must be non-zero and fit in u32, got {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("quality must be between 0 and 100, got {0}")]
    InvalidQuality(u8),
}
