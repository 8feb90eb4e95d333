//! Whole-frame conversions on [`imgref`] buffers.
//!
//! A [`BgraFrame`] is the layout desktop graphics surfaces hand out:
//! row-major BGRA, possibly with padding between rows. Conversions run the
//! strided swizzles once over the whole buffer, so padding is never read or
//! written.
//!
//! ```rust
//! use bitmap_tools::{img, parse_from_hex};
//!
//! let blue = parse_from_hex("0x1e88e5").unwrap();
//! let frame = img::filled(150, 100, blue).unwrap();
//! assert_eq!(frame.buf()[0].b, 0xe5);
//! ```

use imgref::{ImgRef, ImgVec};
use rgb::{Bgra, Gray, Rgb, Rgba};

use crate::swizzle::{self, Rows};
use crate::{Color, SizeError};

/// Row-major BGRA pixels.
pub type BgraFrame = ImgVec<Bgra<u8>>;

/// A `width × height` frame cleared to `color`.
pub fn filled(width: usize, height: usize, color: Color) -> Result<BgraFrame, SizeError> {
    let len = check_frame(width, height)?;
    Ok(ImgVec::new(vec![color.into(); len], width, height))
}

/// Reorder an RGBA image to BGRA, reusing its buffer. Stride is kept.
pub fn swap_rgba_to_bgra(mut img: ImgVec<Rgba<u8>>) -> Result<BgraFrame, SizeError> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(img.buf_mut());
    swizzle::rgba_to_bgra_inplace_strided(bytes, w, h, stride * 4)?;
    let buf: Vec<Bgra<u8>> = bytemuck::allocation::cast_vec(img.into_buf());
    Ok(ImgVec::new_stride(buf, w, h, stride))
}

/// Reorder a BGRA frame to RGBA, reusing its buffer. Stride is kept.
pub fn swap_bgra_to_rgba(mut img: BgraFrame) -> Result<ImgVec<Rgba<u8>>, SizeError> {
    let (w, h, stride) = (img.width(), img.height(), img.stride());
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(img.buf_mut());
    swizzle::rgba_to_bgra_inplace_strided(bytes, w, h, stride * 4)?;
    let buf: Vec<Rgba<u8>> = bytemuck::allocation::cast_vec(img.into_buf());
    Ok(ImgVec::new_stride(buf, w, h, stride))
}

/// Copy a (possibly strided) BGRA frame into a contiguous RGBA image.
pub fn convert_bgra_to_rgba(src: ImgRef<'_, Bgra<u8>>) -> Result<ImgVec<Rgba<u8>>, SizeError> {
    let (w, h) = (src.width(), src.height());
    let mut dst = vec![Rgba::default(); check_frame(w, h)?];
    swizzle::bgra_to_rgba_strided(
        bytemuck::cast_slice(src.buf()),
        bytemuck::cast_slice_mut(&mut dst),
        Rows::new(w, h, src.stride() * 4, w * 4),
    )?;
    Ok(ImgVec::new(dst, w, h))
}

/// Copy an RGB image into a new BGRA frame with alpha=255.
pub fn convert_rgb_to_bgra(src: ImgRef<'_, Rgb<u8>>) -> Result<BgraFrame, SizeError> {
    let (w, h) = (src.width(), src.height());
    let mut dst = vec![Bgra::default(); check_frame(w, h)?];
    swizzle::rgb_to_bgra_strided(
        bytemuck::cast_slice(src.buf()),
        bytemuck::cast_slice_mut(&mut dst),
        Rows::new(w, h, src.stride() * 3, w * 4),
    )?;
    Ok(ImgVec::new(dst, w, h))
}

/// Copy a grayscale image into a new BGRA frame with alpha=255.
pub fn convert_gray_to_bgra(src: ImgRef<'_, Gray<u8>>) -> Result<BgraFrame, SizeError> {
    let (w, h) = (src.width(), src.height());
    let mut dst = vec![Bgra::default(); check_frame(w, h)?];
    swizzle::gray_to_bgra_strided(
        bytemuck::cast_slice(src.buf()),
        bytemuck::cast_slice_mut(&mut dst),
        Rows::new(w, h, src.stride(), w * 4),
    )?;
    Ok(ImgVec::new(dst, w, h))
}

fn check_frame(width: usize, height: usize) -> Result<usize, SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    width.checked_mul(height).ok_or(SizeError::InvalidStride)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_frame_uses_bgra_order() {
        let frame = filled(3, 2, Color::new(0x80, 1, 2, 3)).unwrap();
        assert_eq!((frame.width(), frame.height()), (3, 2));
        assert!(frame.buf().iter().all(|p| *p == Bgra { b: 3, g: 2, r: 1, a: 0x80 }));
        assert_eq!(filled(0, 2, Color::WHITE).unwrap_err(), SizeError::InvalidStride);
    }

    #[test]
    fn swap_rgba_to_bgra_keeps_stride() {
        let img = ImgVec::new_stride(vec![Rgba::new(255u8, 128, 0, 200); 6], 2, 2, 3);
        let bgra = swap_rgba_to_bgra(img).unwrap();
        assert_eq!(bgra.stride(), 3);
        assert_eq!(bgra.buf()[0], Bgra { b: 0, g: 128, r: 255, a: 200 });
        let back = swap_bgra_to_rgba(bgra).unwrap();
        assert_eq!(back.buf()[4], Rgba::new(255, 128, 0, 200));
    }

    #[test]
    fn convert_bgra_to_rgba_compacts_rows() {
        let px = Bgra { b: 3u8, g: 2, r: 1, a: 4 };
        let pad = Bgra { b: 9u8, g: 9, r: 9, a: 9 };
        let buf = [px, px, pad, px, px, pad];
        let src = ImgRef::new_stride(&buf[..], 2, 2, 3);
        let rgba = convert_bgra_to_rgba(src).unwrap();
        assert_eq!(rgba.stride(), 2);
        assert_eq!(rgba.buf().len(), 4);
        assert!(rgba.buf().iter().all(|p| *p == Rgba::new(1, 2, 3, 4)));
    }

    #[test]
    fn convert_rgb_and_gray() {
        let rgb = ImgVec::new(vec![Rgb::new(255u8, 0, 128); 4], 2, 2);
        let bgra = convert_rgb_to_bgra(rgb.as_ref()).unwrap();
        assert_eq!(bgra.buf()[3], Bgra { b: 128, g: 0, r: 255, a: 255 });

        let gray = ImgVec::new(vec![Gray::new(100u8); 4], 2, 2);
        let bgra = convert_gray_to_bgra(gray.as_ref()).unwrap();
        assert_eq!(bgra.buf()[0], Bgra { b: 100, g: 100, r: 100, a: 255 });
    }
}
