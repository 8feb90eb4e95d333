//! Color parsing from hex strings and packed integers.
//!
//! ```rust
//! use bitmap_tools::color::{self, Color};
//!
//! assert_eq!(color::parse_from_hex("0x1e88e5").unwrap(), Color::from_rgb(0x1e, 0x88, 0xe5));
//! assert_eq!(color::parse_from_argb(0xffffeb3b), Color::new(0xff, 0xff, 0xeb, 0x3b));
//! ```

use core::fmt;
use core::str::FromStr;

use crate::FormatError;

/// An 8-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    a: u8,
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Channels in alpha, red, green, blue order.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xFF, r, g, b)
    }

    pub const fn a(self) -> u8 {
        self.a
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }

    /// Packs the color as `0xAARRGGBB`. Inverse of [`parse_from_argb`].
    pub const fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Channels in red, green, blue, alpha order.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Every parser lands here: big-endian bytes, alpha first.
    const fn from_be_channels(bytes: [u8; 4]) -> Self {
        let [a, r, g, b] = bytes;
        Self::new(a, r, g, b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Renders as `#AARRGGBB`, which [`parse_from_hex`] reads back unchanged.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_argb())
    }
}

impl FromStr for Color {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_from_hex(s)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_rgba())
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::Rgba<u8> {
    fn from(c: Color) -> Self {
        rgb::Rgba::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::Bgra<u8> {
    fn from(c: Color) -> Self {
        rgb::Bgra {
            b: c.b,
            g: c.g,
            r: c.r,
            a: c.a,
        }
    }
}

/// Parse a color from hex text.
///
/// A leading `0x`/`0X` is stripped and a missing `#` is added, then the
/// remainder must be one of:
/// * `#RGB` (each digit doubled, opaque)
/// * `#RRGGBB` (opaque)
/// * `#AARRGGBB`
///
/// Hex digits are case-insensitive.
pub fn parse_from_hex(text: &str) -> Result<Color, FormatError> {
    let err = || FormatError::new(text);

    let hex = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

    let bytes = match digits.len() {
        3 => {
            let [r, g, b] = decode_nibbles::<3>(digits).ok_or_else(err)?;
            [0xFF, r * 17, g * 17, b * 17]
        }
        6 => {
            let [r, g, b] = decode_pairs::<3>(digits).ok_or_else(err)?;
            [0xFF, r, g, b]
        }
        8 => decode_pairs::<4>(digits).ok_or_else(err)?,
        _ => return Err(err()),
    };

    Ok(Color::from_be_channels(bytes))
}

/// Parse a packed `0xRRGGBB` value. Alpha is always 255.
///
/// Only the low 24 bits are read: `0x12FFEB3B` and `0x00FFEB3B` give the same
/// color, the same as rendering the value to six hex digits.
pub const fn parse_from_rgb(value: u32) -> Color {
    let [_, r, g, b] = value.to_be_bytes();
    Color::from_be_channels([0xFF, r, g, b])
}

/// Parse a packed `0xAARRGGBB` value.
pub const fn parse_from_argb(value: u32) -> Color {
    Color::from_be_channels(value.to_be_bytes())
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn decode_nibbles<const N: usize>(digits: &[u8]) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    for (o, &c) in out.iter_mut().zip(digits) {
        *o = nibble(c)?;
    }
    Some(out)
}

fn decode_pairs<const N: usize>(digits: &[u8]) -> Option<[u8; N]> {
    let mut out = [0u8; N];
    for (o, pair) in out.iter_mut().zip(digits.chunks_exact(2)) {
        *o = (nibble(pair[0])? << 4) | nibble(pair[1])?;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_0x_prefix_is_opaque() {
        let c = parse_from_hex("0x1e88e5").unwrap();
        assert_eq!(c, Color::new(0xFF, 0x1E, 0x88, 0xE5));
    }

    #[test]
    fn hex_with_uppercase_prefix_and_digits() {
        assert_eq!(
            parse_from_hex("0X1E88E5").unwrap(),
            parse_from_hex("0x1e88e5").unwrap()
        );
    }

    #[test]
    fn hex_eight_digits_is_alpha_first() {
        let c = parse_from_hex("#ffffeb3b").unwrap();
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0xFF, 0xFF, 0xEB, 0x3B));

        let c = parse_from_hex("80102030").unwrap();
        assert_eq!(c, Color::new(0x80, 0x10, 0x20, 0x30));
    }

    #[test]
    fn hex_six_digits_with_and_without_hash() {
        let expected = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(parse_from_hex("#123456").unwrap(), expected);
        assert_eq!(parse_from_hex("123456").unwrap(), expected);
        assert_eq!(parse_from_hex("0x123456").unwrap(), expected);
    }

    #[test]
    fn hex_shorthand_doubles_each_digit() {
        assert_eq!(
            parse_from_hex("#abc").unwrap(),
            Color::from_rgb(0xAA, 0xBB, 0xCC)
        );
        assert_eq!(parse_from_hex("f0F").unwrap(), Color::from_rgb(0xFF, 0, 0xFF));
    }

    #[test]
    fn hex_rejects_bad_digits() {
        let err = parse_from_hex("zz00ff").unwrap_err();
        assert_eq!(err.input(), "zz00ff");
        assert!(parse_from_hex("#12345g").is_err());
        assert!(parse_from_hex("#+12345").is_err());
    }

    #[test]
    fn hex_rejects_bad_lengths() {
        for s in ["", "#", "0x", "#12", "#1234", "#12345", "#1234567", "#123456789"] {
            assert!(parse_from_hex(s).is_err(), "{s:?} should be rejected");
        }
    }

    #[test]
    fn hex_rejects_repeated_prefixes() {
        assert!(parse_from_hex("##123456").is_err());
        assert!(parse_from_hex("0x0x1234").is_err());
        assert!(parse_from_hex("#0x123456").is_err());
        assert!(parse_from_hex(" #123456").is_err());
    }

    #[test]
    fn format_error_reports_original_input() {
        let err = parse_from_hex("0xnothex").unwrap_err();
        assert_eq!(err.input(), "0xnothex");
        assert_eq!(err.to_string(), "cannot parse color from \"0xnothex\"");
    }

    #[test]
    fn rgb_truncates_above_24_bits() {
        let expected = Color::new(0xFF, 0xFF, 0xEB, 0x3B);
        assert_eq!(parse_from_rgb(0x00FF_EB3B), expected);
        assert_eq!(parse_from_rgb(0x12FF_EB3B), expected);
        assert_eq!(parse_from_rgb(0), Color::BLACK);
    }

    #[test]
    fn argb_uses_all_32_bits() {
        assert_eq!(
            parse_from_argb(0xFFFF_EB3B),
            Color::new(0xFF, 0xFF, 0xEB, 0x3B)
        );
        assert_eq!(parse_from_argb(0), Color::TRANSPARENT);
        assert_eq!(parse_from_argb(0x0102_0304).to_argb(), 0x0102_0304);
    }

    #[test]
    fn display_round_trips_through_hex() {
        for argb in [0u32, 0xFFFF_FFFF, 0x80FF_EB3B, 0x0012_3456, 0xDEAD_BEEF] {
            let c = parse_from_argb(argb);
            let s = c.to_string();
            assert_eq!(s.len(), 9);
            assert_eq!(parse_from_hex(&s).unwrap(), c);
            assert_eq!(s.parse::<Color>().unwrap(), c);
        }
        assert_eq!(Color::from_rgb(0x1E, 0x88, 0xE5).to_string(), "#FF1E88E5");
    }

    #[test]
    fn converts_into_pixel_types() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(image::Rgba::from(c), image::Rgba([20, 30, 40, 10]));
        #[cfg(feature = "rgb")]
        {
            assert_eq!(rgb::Rgba::from(c), rgb::Rgba::new(20, 30, 40, 10));
            let bgra = rgb::Bgra::from(c);
            assert_eq!((bgra.b, bgra.g, bgra.r, bgra.a), (40, 30, 20, 10));
        }
    }
}
