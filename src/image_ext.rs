//! Extension methods on [`DynamicImage`]: byte streams, resizing, JPEG
//! compression, pixel-format changes and BGRA frames.
//!
//! Encoding and decoding go through the `image` codecs; resizing uses its
//! resamplers. The defaults are PNG for serialization and bicubic
//! (Catmull-Rom) for resizing.
//!
//! ```no_run
//! use bitmap_tools::{BitmapExt, PixelFormat};
//! use image::DynamicImage;
//!
//! # fn example() -> Result<(), bitmap_tools::BitmapError> {
//! let image = DynamicImage::new_rgb8(640, 480);
//! let png: Vec<u8> = image.to_bytes()?;
//! let thumb = image.resize_by(0.25)?;
//! let small = thumb.compress(70)?;
//! let gray = small.change_pixel_format(PixelFormat::Gray8);
//! gray.save_compressed_to_path("thumb.jpg", 85)?;
//! # Ok(())
//! # }
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, ImageFormat};
use log::{debug, trace};

use crate::{BitmapError, PixelFormat};

#[cfg(feature = "imgref")]
use crate::img::{self, BgraFrame};
#[cfg(feature = "imgref")]
use image::RgbaImage;
#[cfg(feature = "imgref")]
use crate::swizzle;
#[cfg(feature = "imgref")]
use imgref::{ImgRef, ImgVec};
#[cfg(feature = "imgref")]
use rgb::Bgra;

/// Format used by the methods without an explicit format.
pub const DEFAULT_FORMAT: ImageFormat = ImageFormat::Png;

/// Resampling quality for [`BitmapExt::resize_to_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeQuality {
    /// Bicubic (Catmull-Rom).
    #[default]
    HighQuality,
    /// Bilinear.
    Standard,
}

impl ResizeQuality {
    const fn filter(self) -> FilterType {
        match self {
            Self::HighQuality => FilterType::CatmullRom,
            Self::Standard => FilterType::Triangle,
        }
    }
}

/// Convenience operations on decoded images.
pub trait BitmapExt {
    /// Encode as PNG into an in-memory stream positioned at the start.
    fn to_stream(&self) -> Result<Cursor<Vec<u8>>, BitmapError> {
        self.to_stream_with_format(DEFAULT_FORMAT)
    }

    /// Encode as `format` into an in-memory stream positioned at the start.
    fn to_stream_with_format(&self, format: ImageFormat) -> Result<Cursor<Vec<u8>>, BitmapError> {
        let mut stream = Cursor::new(Vec::new());
        self.write_to_stream(&mut stream, format)?;
        stream.set_position(0);
        Ok(stream)
    }

    /// Encode as `format` into `writer`.
    fn write_to_stream<W: Write + Seek>(
        &self,
        writer: &mut W,
        format: ImageFormat,
    ) -> Result<(), BitmapError>;

    /// Encoded PNG bytes.
    fn to_bytes(&self) -> Result<Vec<u8>, BitmapError> {
        self.to_bytes_with_format(DEFAULT_FORMAT)
    }

    /// Encoded bytes in `format`.
    fn to_bytes_with_format(&self, format: ImageFormat) -> Result<Vec<u8>, BitmapError> {
        Ok(self.to_stream_with_format(format)?.into_inner())
    }

    /// Encode as `format` and decode the result again.
    fn reencode(&self, format: ImageFormat) -> Result<DynamicImage, BitmapError> {
        let bytes = self.to_bytes_with_format(format)?;
        Ok(image::load_from_memory_with_format(&bytes, format)?)
    }

    /// Resize to exactly `width × height` with bicubic interpolation.
    fn resize_to(&self, width: u32, height: u32) -> Result<DynamicImage, BitmapError> {
        self.resize_to_with(width, height, ResizeQuality::default())
    }

    /// Resize to exactly `width × height`. Both must be non-zero.
    fn resize_to_with(
        &self,
        width: u32,
        height: u32,
        quality: ResizeQuality,
    ) -> Result<DynamicImage, BitmapError>;

    /// Scale both sides by `multiplier`, rounding half to even.
    ///
    /// Fails for a negative or NaN multiplier, and when a side rounds to zero
    /// or past `u32::MAX`.
    fn resize_by(&self, multiplier: f64) -> Result<DynamicImage, BitmapError>;

    /// JPEG-encode at `quality` (0–100) and decode the result.
    fn compress(&self, quality: u8) -> Result<DynamicImage, BitmapError>;

    /// JPEG-encode at `quality` (0–100) into `writer`.
    fn save_compressed<W: Write>(&self, writer: &mut W, quality: u8) -> Result<(), BitmapError>;

    /// JPEG-encode at `quality` (0–100) into a new file at `path`.
    fn save_compressed_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        quality: u8,
    ) -> Result<(), BitmapError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_compressed(&mut writer, quality)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode as `format` into `writer`. `quality` only affects JPEG.
    fn save_compressed_with_format<W: Write + Seek>(
        &self,
        writer: &mut W,
        quality: u8,
        format: ImageFormat,
    ) -> Result<(), BitmapError>;

    /// Encode as `format` into a new file at `path`. `quality` only affects JPEG.
    fn save_compressed_to_path_with_format<P: AsRef<Path>>(
        &self,
        path: P,
        quality: u8,
        format: ImageFormat,
    ) -> Result<(), BitmapError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save_compressed_with_format(&mut writer, quality, format)?;
        writer.flush()?;
        Ok(())
    }

    /// Copy into a new image with the given pixel layout.
    fn change_pixel_format(&self, format: PixelFormat) -> DynamicImage;

    /// Current pixel layout, if it is one [`PixelFormat`] names.
    fn pixel_format(&self) -> Option<PixelFormat>;

    /// Copy into a contiguous BGRA frame.
    #[cfg(feature = "imgref")]
    fn to_bgra_frame(&self) -> Result<BgraFrame, BitmapError>;
}

impl BitmapExt for DynamicImage {
    fn write_to_stream<W: Write + Seek>(
        &self,
        writer: &mut W,
        format: ImageFormat,
    ) -> Result<(), BitmapError> {
        trace!("encoding {}x{} image as {format:?}", self.width(), self.height());
        encodable(self, format).write_to(writer, format)?;
        Ok(())
    }

    fn resize_to_with(
        &self,
        width: u32,
        height: u32,
        quality: ResizeQuality,
    ) -> Result<DynamicImage, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }
        trace!(
            "resizing {}x{} to {width}x{height} ({quality:?})",
            self.width(),
            self.height()
        );
        Ok(self.resize_exact(width, height, quality.filter()))
    }

    fn resize_by(&self, multiplier: f64) -> Result<DynamicImage, BitmapError> {
        if multiplier.is_nan() || multiplier < 0.0 {
            return Err(BitmapError::NegativeMultiplier(multiplier));
        }
        let width = (f64::from(self.width()) * multiplier).round_ties_even();
        let height = (f64::from(self.height()) * multiplier).round_ties_even();
        let max = f64::from(u32::MAX);
        if !(1.0..=max).contains(&width) || !(1.0..=max).contains(&height) {
            return Err(BitmapError::InvalidDimensions {
                width: width as u64,
                height: height as u64,
            });
        }
        self.resize_to(width as u32, height as u32)
    }

    fn compress(&self, quality: u8) -> Result<DynamicImage, BitmapError> {
        let mut buf = Vec::new();
        self.save_compressed(&mut buf, quality)?;
        Ok(image::load_from_memory_with_format(&buf, ImageFormat::Jpeg)?)
    }

    fn save_compressed<W: Write>(&self, writer: &mut W, quality: u8) -> Result<(), BitmapError> {
        let quality = jpeg_quality(quality)?;
        trace!(
            "encoding {}x{} image as JPEG at quality {quality}",
            self.width(),
            self.height()
        );
        encodable(self, ImageFormat::Jpeg)
            .write_with_encoder(JpegEncoder::new_with_quality(writer, quality))?;
        Ok(())
    }

    fn save_compressed_with_format<W: Write + Seek>(
        &self,
        writer: &mut W,
        quality: u8,
        format: ImageFormat,
    ) -> Result<(), BitmapError> {
        if format == ImageFormat::Jpeg {
            return self.save_compressed(writer, quality);
        }
        if quality > 100 {
            return Err(BitmapError::InvalidQuality(quality));
        }
        debug!("{format:?} has no quality setting, ignoring quality {quality}");
        self.write_to_stream(writer, format)
    }

    fn change_pixel_format(&self, format: PixelFormat) -> DynamicImage {
        format.convert(self)
    }

    fn pixel_format(&self) -> Option<PixelFormat> {
        PixelFormat::of(self)
    }

    #[cfg(feature = "imgref")]
    fn to_bgra_frame(&self) -> Result<BgraFrame, BitmapError> {
        let (w, h) = (self.width() as usize, self.height() as usize);
        if w == 0 || h == 0 {
            return Err(BitmapError::InvalidDimensions {
                width: w as u64,
                height: h as u64,
            });
        }
        // `image` buffers are packed rows, so each layout converts in one pass.
        let n = w * h;
        let pixels: Vec<Bgra<u8>> = match self {
            DynamicImage::ImageLuma8(gray) => {
                let mut out = vec![Bgra::default(); n];
                swizzle::gray_to_bgra(&gray.as_raw()[..n], bytemuck::cast_slice_mut(&mut out))?;
                out
            }
            DynamicImage::ImageRgb8(rgb) => {
                let mut out = vec![Bgra::default(); n];
                swizzle::rgb_to_bgra(&rgb.as_raw()[..n * 3], bytemuck::cast_slice_mut(&mut out))?;
                out
            }
            other => {
                let mut raw = other.to_rgba8().into_raw();
                raw.truncate(n * 4);
                swizzle::rgba_to_bgra_inplace(&mut raw)?;
                bytemuck::allocation::try_cast_vec(raw)
                    .unwrap_or_else(|(_, raw)| bytemuck::cast_slice(&raw).to_vec())
            }
        };
        Ok(ImgVec::new(pixels, w, h))
    }
}

/// Decode an image, guessing the format from its content.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, BitmapError> {
    trace!("decoding {} bytes", bytes.len());
    Ok(image::load_from_memory(bytes)?)
}

/// Build an RGBA image from a (possibly strided) BGRA frame.
#[cfg(feature = "imgref")]
pub fn from_bgra_frame(frame: ImgRef<'_, Bgra<u8>>) -> Result<DynamicImage, BitmapError> {
    let (fw, fh) = (frame.width(), frame.height());
    let invalid = || BitmapError::InvalidDimensions {
        width: fw as u64,
        height: fh as u64,
    };
    if fw == 0 || fh == 0 {
        return Err(invalid());
    }
    let width = u32::try_from(fw).map_err(|_| invalid())?;
    let height = u32::try_from(fh).map_err(|_| invalid())?;

    let rgba = img::convert_bgra_to_rgba(frame)?;
    let raw: Vec<u8> = bytemuck::allocation::cast_vec(rgba.into_buf());
    let buffer = RgbaImage::from_raw(width, height, raw).ok_or_else(invalid)?;
    Ok(DynamicImage::ImageRgba8(buffer))
}

fn jpeg_quality(quality: u8) -> Result<u8, BitmapError> {
    match quality {
        0 => {
            debug!("JPEG quality 0 clamped to 1");
            Ok(1)
        }
        1..=100 => Ok(quality),
        _ => Err(BitmapError::InvalidQuality(quality)),
    }
}

/// `image` converted, if needed, to a layout the `format` encoder accepts.
fn encodable(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    let color = image.color();
    let target = match format {
        ImageFormat::Jpeg => match color {
            ColorType::L8 | ColorType::Rgb8 => None,
            ColorType::La8 | ColorType::L16 | ColorType::La16 => Some(PixelFormat::Gray8),
            _ => Some(PixelFormat::Rgb8),
        },
        ImageFormat::Png => match color {
            ColorType::Rgb32F => Some(PixelFormat::Rgb16),
            ColorType::Rgba32F => Some(PixelFormat::Rgba16),
            _ => None,
        },
        _ => match color {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => None,
            c if c.has_alpha() => Some(PixelFormat::Rgba8),
            _ => Some(PixelFormat::Rgb8),
        },
    };
    match target {
        Some(target) => {
            debug!("{format:?} cannot store {color:?}, converting to {target:?}");
            Cow::Owned(target.convert(image))
        }
        None => Cow::Borrowed(image),
    }
}
