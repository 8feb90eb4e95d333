// Byte-level BGRA conversions behind runtime tier dispatch.
//
// Every kernel walks `Rows`: `width` pixels per row, `height` rows, and a
// byte stride for each side. Packed buffers from `image` go through as a
// single row; `imgref` frames bring their own stride.

use archmage::incant;

use crate::SizeError;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;


/// Row geometry shared by source and destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rows {
    width: usize,
    height: usize,
    src_stride: usize,
    dst_stride: usize,
}

impl Rows {
    /// Strides are in bytes.
    pub(crate) const fn new(width: usize, height: usize, src_stride: usize, dst_stride: usize) -> Self {
        Self {
            width,
            height,
            src_stride,
            dst_stride,
        }
    }

    /// A packed buffer of `src_len / src_bpp` pixels as one row.
    fn packed(
        src_len: usize,
        src_bpp: usize,
        dst_len: usize,
        dst_bpp: usize,
    ) -> Result<Self, SizeError> {
        if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
            return Err(SizeError::NotPixelAligned);
        }
        let width = src_len / src_bpp;
        if dst_len / dst_bpp < width {
            return Err(SizeError::PixelCountMismatch);
        }
        Ok(Self::new(width, 1, src_len, width * dst_bpp))
    }

    /// `len` bytes hold every row at `stride` with `bpp` bytes per pixel.
    fn fits(&self, len: usize, stride: usize, bpp: usize) -> Result<(), SizeError> {
        if self.width == 0 || self.height == 0 {
            return Err(SizeError::InvalidStride);
        }
        let row = self
            .width
            .checked_mul(bpp)
            .filter(|&row| row <= stride)
            .ok_or(SizeError::InvalidStride)?;
        let needed = (self.height - 1)
            .checked_mul(stride)
            .and_then(|n| n.checked_add(row))
            .ok_or(SizeError::InvalidStride)?;
        if needed > len {
            return Err(SizeError::InvalidStride);
        }
        Ok(())
    }

    fn check(&self, src_len: usize, src_bpp: usize, dst_len: usize) -> Result<(), SizeError> {
        self.fits(src_len, self.src_stride, src_bpp)?;
        self.fits(dst_len, self.dst_stride, 4)
    }
}

// ---------------------------------------------------------------------------
// Packed
// ---------------------------------------------------------------------------

/// Swap R and B of every 4-byte pixel in place.
pub(crate) fn rgba_to_bgra_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    let rows = Rows::packed(buf.len(), 4, buf.len(), 4)?;
    incant!(swap_rb_rows(buf, rows), [v3, scalar]);
    Ok(())
}

/// 3-byte RGB to 4-byte BGRA, alpha 255.
pub(crate) fn rgb_to_bgra(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    let rows = Rows::packed(src.len(), 3, dst.len(), 4)?;
    incant!(rgb_to_bgra_rows(src, dst, rows), [v3, scalar]);
    Ok(())
}

/// 1-byte gray to 4-byte BGRA, alpha 255.
pub(crate) fn gray_to_bgra(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    let rows = Rows::packed(src.len(), 1, dst.len(), 4)?;
    incant!(gray_to_bgra_rows(src, dst, rows), [v3, scalar]);
    Ok(())
}

// ---------------------------------------------------------------------------
// Strided
// ---------------------------------------------------------------------------

/// In-place R/B swap over rows at `stride` bytes. Padding is left alone.
pub(crate) fn rgba_to_bgra_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    let rows = Rows::new(width, height, stride, stride);
    rows.fits(buf.len(), stride, 4)?;
    incant!(swap_rb_rows(buf, rows), [v3, scalar]);
    Ok(())
}

/// BGRA rows to RGBA rows; the same swap read the other way.
pub(crate) fn bgra_to_rgba_strided(src: &[u8], dst: &mut [u8], rows: Rows) -> Result<(), SizeError> {
    rows.check(src.len(), 4, dst.len())?;
    incant!(copy_swap_rb_rows(src, dst, rows), [v3, scalar]);
    Ok(())
}

pub(crate) fn rgb_to_bgra_strided(src: &[u8], dst: &mut [u8], rows: Rows) -> Result<(), SizeError> {
    rows.check(src.len(), 3, dst.len())?;
    incant!(rgb_to_bgra_rows(src, dst, rows), [v3, scalar]);
    Ok(())
}

pub(crate) fn gray_to_bgra_strided(src: &[u8], dst: &mut [u8], rows: Rows) -> Result<(), SizeError> {
    rows.check(src.len(), 1, dst.len())?;
    incant!(gray_to_bgra_rows(src, dst, rows), [v3, scalar]);
    Ok(())
}
