use archmage::prelude::*;

// Plain loops compiled with AVX2 enabled. Rows are viewed as pixel arrays
// so the bounds checks hoist out and the u32 swap vectorizes to shuffles.

#[inline(always)]
fn swap_rb(px: [u8; 4]) -> [u8; 4] {
    let v = u32::from_ne_bytes(px);
    ((v & 0xFF00_FF00) | (v.rotate_left(16) & 0x00FF_00FF)).to_ne_bytes()
}

#[rite]
fn swap_rb_row_v3(_token: X64V3Token, row: &mut [[u8; 4]]) {
    for px in row {
        *px = swap_rb(*px);
    }
}

#[rite]
fn copy_swap_rb_row_v3(_token: X64V3Token, src: &[[u8; 4]], dst: &mut [[u8; 4]]) {
    for (s, d) in src.iter().zip(dst) {
        *d = swap_rb(*s);
    }
}

#[rite]
fn rgb_to_bgra_row_v3(_token: X64V3Token, src: &[[u8; 3]], dst: &mut [[u8; 4]]) {
    for (&[r, g, b], d) in src.iter().zip(dst) {
        *d = [b, g, r, 0xFF];
    }
}

#[rite]
fn gray_to_bgra_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [[u8; 4]]) {
    for (&v, d) in src.iter().zip(dst) {
        *d = [v, v, v, 0xFF];
    }
}

#[arcane]
pub(super) fn swap_rb_rows_v3(t: X64V3Token, buf: &mut [u8], rows: super::Rows) {
    for y in 0..rows.height {
        let row = &mut buf[y * rows.src_stride..][..rows.width * 4];
        swap_rb_row_v3(t, bytemuck::cast_slice_mut(row));
    }
}

#[arcane]
pub(super) fn copy_swap_rb_rows_v3(t: X64V3Token, src: &[u8], dst: &mut [u8], rows: super::Rows) {
    for y in 0..rows.height {
        let s = &src[y * rows.src_stride..][..rows.width * 4];
        let d = &mut dst[y * rows.dst_stride..][..rows.width * 4];
        copy_swap_rb_row_v3(t, bytemuck::cast_slice(s), bytemuck::cast_slice_mut(d));
    }
}

#[arcane]
pub(super) fn rgb_to_bgra_rows_v3(t: X64V3Token, src: &[u8], dst: &mut [u8], rows: super::Rows) {
    for y in 0..rows.height {
        let s = &src[y * rows.src_stride..][..rows.width * 3];
        let d = &mut dst[y * rows.dst_stride..][..rows.width * 4];
        rgb_to_bgra_row_v3(t, bytemuck::cast_slice(s), bytemuck::cast_slice_mut(d));
    }
}

#[arcane]
pub(super) fn gray_to_bgra_rows_v3(t: X64V3Token, src: &[u8], dst: &mut [u8], rows: super::Rows) {
    for y in 0..rows.height {
        let s = &src[y * rows.src_stride..][..rows.width];
        let d = &mut dst[y * rows.dst_stride..][..rows.width * 4];
        gray_to_bgra_row_v3(t, s, bytemuck::cast_slice_mut(d));
    }
}
