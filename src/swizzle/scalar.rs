use archmage::prelude::*;

use super::Rows;

pub(super) fn swap_rb_rows_scalar(_token: ScalarToken, buf: &mut [u8], rows: Rows) {
    for y in 0..rows.height {
        for px in buf[y * rows.src_stride..][..rows.width * 4].chunks_exact_mut(4) {
            px.swap(0, 2);
        }
    }
}

pub(super) fn copy_swap_rb_rows_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], rows: Rows) {
    for y in 0..rows.height {
        let s = &src[y * rows.src_stride..][..rows.width * 4];
        let d = &mut dst[y * rows.dst_stride..][..rows.width * 4];
        for (s, d) in s.chunks_exact(4).zip(d.chunks_exact_mut(4)) {
            d.copy_from_slice(&[s[2], s[1], s[0], s[3]]);
        }
    }
}

pub(super) fn rgb_to_bgra_rows_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], rows: Rows) {
    for y in 0..rows.height {
        let s = &src[y * rows.src_stride..][..rows.width * 3];
        let d = &mut dst[y * rows.dst_stride..][..rows.width * 4];
        for (s, d) in s.chunks_exact(3).zip(d.chunks_exact_mut(4)) {
            d.copy_from_slice(&[s[2], s[1], s[0], 0xFF]);
        }
    }
}

pub(super) fn gray_to_bgra_rows_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], rows: Rows) {
    for y in 0..rows.height {
        let s = &src[y * rows.src_stride..][..rows.width];
        let d = &mut dst[y * rows.dst_stride..][..rows.width * 4];
        for (&v, d) in s.iter().zip(d.chunks_exact_mut(4)) {
            d.copy_from_slice(&[v, v, v, 0xFF]);
        }
    }
}
