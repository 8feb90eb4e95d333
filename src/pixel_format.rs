//! Pixel layouts a decoded image can be converted between.

use image::{ColorType, DynamicImage};

/// Channel layout and sample type of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
    Gray8,
    GrayAlpha8,
    Rgb8,
    Rgba8,
    Gray16,
    GrayAlpha16,
    Rgb16,
    Rgba16,
    Rgb32F,
    Rgba32F,
}

impl PixelFormat {
    /// Whether the layout carries an alpha channel.
    pub const fn has_alpha(self) -> bool {
        matches!(
            self,
            Self::GrayAlpha8 | Self::Rgba8 | Self::GrayAlpha16 | Self::Rgba16 | Self::Rgba32F
        )
    }

    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::GrayAlpha8 | Self::Gray16 => 2,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::GrayAlpha16 => 4,
            Self::Rgb16 => 6,
            Self::Rgba16 => 8,
            Self::Rgb32F => 12,
            Self::Rgba32F => 16,
        }
    }

    /// The layout of `image`, if it is one listed here.
    pub fn of(image: &DynamicImage) -> Option<Self> {
        Self::try_from(image.color()).ok()
    }

    /// Convert `image` to this layout. Dimensions are unchanged.
    pub fn convert(self, image: &DynamicImage) -> DynamicImage {
        match self {
            Self::Gray8 => DynamicImage::ImageLuma8(image.to_luma8()),
            Self::GrayAlpha8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
            Self::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
            Self::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
            Self::Gray16 => DynamicImage::ImageLuma16(image.to_luma16()),
            Self::GrayAlpha16 => DynamicImage::ImageLumaA16(image.to_luma_alpha16()),
            Self::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
            Self::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
            Self::Rgb32F => DynamicImage::ImageRgb32F(image.to_rgb32f()),
            Self::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        }
    }
}

impl TryFrom<ColorType> for PixelFormat {
    type Error = ColorType;

    fn try_from(color: ColorType) -> Result<Self, Self::Error> {
        Ok(match color {
            ColorType::L8 => Self::Gray8,
            ColorType::La8 => Self::GrayAlpha8,
            ColorType::Rgb8 => Self::Rgb8,
            ColorType::Rgba8 => Self::Rgba8,
            ColorType::L16 => Self::Gray16,
            ColorType::La16 => Self::GrayAlpha16,
            ColorType::Rgb16 => Self::Rgb16,
            ColorType::Rgba16 => Self::Rgba16,
            ColorType::Rgb32F => Self::Rgb32F,
            ColorType::Rgba32F => Self::Rgba32F,
            other => return Err(other),
        })
    }
}

impl From<PixelFormat> for ColorType {
    fn from(format: PixelFormat) -> Self {
        match format {
            PixelFormat::Gray8 => ColorType::L8,
            PixelFormat::GrayAlpha8 => ColorType::La8,
            PixelFormat::Rgb8 => ColorType::Rgb8,
            PixelFormat::Rgba8 => ColorType::Rgba8,
            PixelFormat::Gray16 => ColorType::L16,
            PixelFormat::GrayAlpha16 => ColorType::La16,
            PixelFormat::Rgb16 => ColorType::Rgb16,
            PixelFormat::Rgba16 => ColorType::Rgba16,
            PixelFormat::Rgb32F => ColorType::Rgb32F,
            PixelFormat::Rgba32F => ColorType::Rgba32F,
        }
    }
}
