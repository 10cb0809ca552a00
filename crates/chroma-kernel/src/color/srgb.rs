//! sRGB display color type
//!
//! sRGB is the gamma-encoded form handed to displays and serialized as hex.
//! It is the final output of gamut mapping and pigment mixing.

use std::fmt;
use std::str::FromStr;

use super::gamma;
use super::linear_rgb::LinearRgb;
use crate::error::ParseColorError;

/// A gamma-encoded display color.
///
/// Channels are conceptually in `0.0..=1.0`; values outside that range are
/// kept as-is until serialization, which clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
    /// Opacity, 0.0..=1.0
    pub alpha: f64,
}

/// Quantize a unit-range value to a byte: `round(clamp(c, 0, 1) * 255)`.
#[inline]
fn to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Srgb {
    /// Create a new opaque Srgb color from float values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Create an opaque Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use chroma_kernel::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Create an Srgb color from 8-bit channels including alpha.
    #[inline]
    pub fn from_u8_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_u8(r, g, b).with_alpha(a as f64 / 255.0)
    }

    /// Pure black with the given opacity.
    #[inline]
    pub fn black(alpha: f64) -> Self {
        Self::new(0.0, 0.0, 0.0).with_alpha(alpha)
    }

    /// Pure white with the given opacity.
    #[inline]
    pub fn white(alpha: f64) -> Self {
        Self::new(1.0, 1.0, 1.0).with_alpha(alpha)
    }

    /// Return a copy with the given opacity, clamped to `0.0..=1.0`.
    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Clamps and rounds values to the 0..=255 range.
    ///
    /// # Example
    /// ```
    /// use chroma_kernel::Srgb;
    /// let color = Srgb::new(1.0, 0.5, -0.2);
    /// assert_eq!(color.to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [to_byte(self.r), to_byte(self.g), to_byte(self.b)]
    }

    /// Alpha quantized to a byte.
    #[inline]
    pub fn alpha_byte(self) -> u8 {
        to_byte(self.alpha)
    }

    /// Serialize as lowercase `#rrggbb`.
    ///
    /// # Example
    /// ```
    /// use chroma_kernel::Srgb;
    /// assert_eq!(Srgb::from_u8(38, 169, 241).to_hex(), "#26a9f1");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        let packed = (1u32 << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
        // The leading 1 pins the width at seven digits; drop it.
        format!("#{}", &format!("{packed:x}")[1..])
    }

    /// Serialize as lowercase `#rrggbbaa`.
    pub fn to_hex_with_alpha(self) -> String {
        format!("{}{:02x}", self.to_hex(), self.alpha_byte())
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-compress linear light for display. No clamping is applied.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: gamma::encode(linear.r),
            g: gamma::encode(linear.g),
            b: gamma::encode(linear.b),
            alpha: linear.alpha,
        }
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha_byte() == 255 {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.to_hex_with_alpha())
        }
    }
}

impl FromStr for Srgb {
    type Err = ParseColorError;

    /// Parse a display color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RGB` - shorthand, each digit expanded (`F` -> `FF`)
    /// - `#RRGGBB` - standard 6-digit hex
    /// - `#RRGGBBAA` - 6-digit hex followed by alpha
    ///
    /// The `#` is optional. Parsing is case-insensitive. Leading and trailing
    /// whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_kernel::Srgb;
    ///
    /// let red: Srgb = "#F00".parse().unwrap();
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    ///
    /// let translucent: Srgb = "#ff000080".parse().unwrap();
    /// assert_eq!(translucent.alpha_byte(), 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidHex(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        let byte = |i: usize| (digits[i] << 4) | digits[i + 1];

        match digits.len() {
            // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
            3 => Ok(Self::from_u8(digits[0] * 17, digits[1] * 17, digits[2] * 17)),
            6 => Ok(Self::from_u8(byte(0), byte(2), byte(4))),
            8 => Ok(Self::from_u8_alpha(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test round-trip accuracy: u8 -> Srgb -> LinearRgb -> Srgb -> u8
    #[test]
    fn test_srgb_round_trip_accuracy() {
        for i in 0..=255u8 {
            let original = Srgb::from_u8(i, i, i);
            let back = Srgb::from(LinearRgb::from(original));
            assert_eq!(back.to_bytes(), [i, i, i], "round trip failed for {i}");
        }
    }

    #[test]
    fn test_srgb_constructors() {
        let color = Srgb::from_u8(255, 128, 0);
        assert_eq!(color.r, 1.0);
        assert!((color.g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(color.b, 0.0);
        assert_eq!(color.alpha, 1.0);

        assert_eq!(Srgb::from_u8(0, 0, 0).to_bytes(), [0, 0, 0]);
        assert_eq!(Srgb::from_u8(127, 127, 127).to_bytes(), [127, 127, 127]);
        assert_eq!(Srgb::from_u8(128, 128, 128).to_bytes(), [128, 128, 128]);
        assert_eq!(Srgb::from_u8(255, 255, 255).to_bytes(), [255, 255, 255]);

        assert_eq!(Srgb::black(0.5).to_bytes(), [0, 0, 0]);
        assert_eq!(Srgb::white(0.5).alpha, 0.5);
    }

    #[test]
    fn test_to_bytes_clamps() {
        assert_eq!(Srgb::new(1.4, -0.3, 0.5).to_bytes(), [255, 0, 128]);
    }

    #[test]
    fn test_hex_serialization() {
        assert_eq!(Srgb::from_u8(0, 0, 0).to_hex(), "#000000");
        assert_eq!(Srgb::from_u8(255, 255, 255).to_hex(), "#ffffff");
        assert_eq!(Srgb::from_u8(0xFC, 0xE3, 0x00).to_hex(), "#fce300");
        assert_eq!(Srgb::from_u8(0x00, 0x21, 0xAB).to_hex(), "#0021ab");
        assert_eq!(
            Srgb::from_u8_alpha(0x12, 0x34, 0x56, 0x78).to_hex_with_alpha(),
            "#12345678"
        );
        assert_eq!(Srgb::from_u8(1, 2, 3).to_hex_with_alpha(), "#010203ff");
    }

    #[test]
    fn test_display_uses_alpha_only_when_translucent() {
        assert_eq!(Srgb::from_u8(1, 2, 3).to_string(), "#010203");
        assert_eq!(Srgb::from_u8_alpha(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Srgb = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Srgb::new(1.0, 1.0, 1.0));

        let red: Srgb = "#FF0000".parse().unwrap();
        assert_eq!(red, Srgb::new(1.0, 0.0, 0.0));

        let white_no_hash: Srgb = "FFFFFF".parse().unwrap();
        assert_eq!(white_no_hash, white);
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let red: Srgb = "#f00".parse().unwrap();
        assert_eq!(red, Srgb::new(1.0, 0.0, 0.0));

        let color: Srgb = "#ABC".parse().unwrap();
        assert_eq!(color, Srgb::from_u8(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_hex_parsing_8digit() {
        let color: Srgb = "#FCE30080".parse().unwrap();
        assert_eq!(color.to_bytes(), [0xFC, 0xE3, 0x00]);
        assert_eq!(color.alpha_byte(), 0x80);

        let opaque: Srgb = "#000000ff".parse().unwrap();
        assert_eq!(opaque.alpha, 1.0);
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert_eq!("#GGG".parse::<Srgb>(), Err(ParseColorError::InvalidHex('G')));
        assert_eq!(
            "#12345g".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex('g'))
        );
        assert_eq!("#FFFF".parse::<Srgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#FFFFF".parse::<Srgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("".parse::<Srgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#".parse::<Srgb>(), Err(ParseColorError::InvalidLength));
        assert_eq!("#ééé".parse::<Srgb>(), Err(ParseColorError::InvalidHex('é')));
        assert_eq!(
            "#+f0000".parse::<Srgb>(),
            Err(ParseColorError::InvalidHex('+'))
        );
    }

    #[test]
    fn test_hex_parsing_whitespace_and_case() {
        let white: Srgb = "  #FFFFFF  ".parse().unwrap();
        assert_eq!(white, Srgb::new(1.0, 1.0, 1.0));

        let upper: Srgb = "#ABCDEF".parse().unwrap();
        let lower: Srgb = "#abcdef".parse().unwrap();
        let mixed: Srgb = "#AbCdEf".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, mixed);
    }

    #[test]
    fn test_hex_round_trip_all_levels() {
        for v in 0..=255u8 {
            let color = Srgb::from_u8_alpha(v, 255 - v, v / 2, v);
            let parsed: Srgb = color.to_hex_with_alpha().parse().unwrap();
            assert_eq!(parsed.to_bytes(), color.to_bytes());
            assert_eq!(parsed.alpha_byte(), color.alpha_byte());
        }
    }
}
