//! # bitmap-tools
//!
//! Small conveniences for working with bitmaps.
//!
//! - [`color`] parses colors from `#RRGGBB` / `#AARRGGBB` / `#RGB` text and
//!   from packed `0xRRGGBB` / `0xAARRGGBB` integers.
//! - [`BitmapExt`] adds encoding (PNG by default), high-quality resizing,
//!   JPEG compression and pixel-format conversion to [`image::DynamicImage`].
//! - [`img`] moves pixels between the RGBA layout decoders produce and the
//!   (possibly strided) BGRA layout desktop graphics surfaces expect.
//!
//! Decoding, encoding and resampling are done by the [`image`] crate.
//!
//! ## Feature flags
//!
//! - **`rgb`**: `Color` conversions into [`rgb`] pixel types.
//! - **`imgref`**: BGRA frames on [`imgref`] buffers and the frame methods
//!   of [`BitmapExt`]. Implies `rgb`. On by default.

#![forbid(unsafe_code)]

mod error;
#[cfg(feature = "imgref")]
mod swizzle;

pub mod color;
pub mod image_ext;
pub mod pixel_format;

pub use color::{Color, parse_from_argb, parse_from_hex, parse_from_rgb};
pub use error::{BitmapError, FormatError, SizeError};
pub use image_ext::{BitmapExt, ResizeQuality};
pub use pixel_format::PixelFormat;

#[cfg(feature = "imgref")]
pub mod img;
