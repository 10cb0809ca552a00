//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! It is also where gamut membership is decided: a color is displayable when
//! every linear channel lies in `0.0..=1.0`.

use super::gamma;
use super::srgb::Srgb;

/// Tolerance applied to the `[0, 1]` channel bounds when testing gamut
/// membership, absorbing floating point rounding from the matrix transforms.
pub const GAMUT_EPSILON: f64 = 1e-4;

/// A color in linear RGB color space.
///
/// Linear RGB values represent light intensity proportional to physical light power.
/// Values are not clamped: colors converted from outside the sRGB gamut have
/// channels below 0.0 or above 1.0 until they are clipped or gamut-mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
    /// Opacity, 0.0..=1.0
    pub alpha: f64,
}

impl LinearRgb {
    /// Create a new opaque LinearRgb color from linear RGB values.
    ///
    /// # Arguments
    /// * `r` - Red channel (typically 0.0..=1.0)
    /// * `g` - Green channel (typically 0.0..=1.0)
    /// * `b` - Blue channel (typically 0.0..=1.0)
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    /// Return a copy with the given opacity, clamped to `0.0..=1.0`.
    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Whether every channel lies within `[-GAMUT_EPSILON, 1 + GAMUT_EPSILON]`.
    ///
    /// # Example
    ///
    /// ```
    /// use chroma_kernel::LinearRgb;
    ///
    /// assert!(LinearRgb::new(1.00005, 0.5, -0.00005).is_in_gamut());
    /// assert!(!LinearRgb::new(1.01, 0.5, 0.0).is_in_gamut());
    /// ```
    #[inline]
    pub fn is_in_gamut(&self) -> bool {
        let in_range = |c: f64| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&c);
        in_range(self.r) && in_range(self.g) && in_range(self.b)
    }

    /// Clamp every channel into `0.0..=1.0`. Alpha is preserved.
    #[inline]
    pub fn clip(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            alpha: self.alpha,
        }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma-expand a display color into linear light.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: gamma::decode(srgb.r),
            g: gamma::decode(srgb.g),
            b: gamma::decode(srgb.b),
            alpha: srgb.alpha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamut_epsilon_bounds() {
        assert!(LinearRgb::new(0.0, 0.0, 0.0).is_in_gamut());
        assert!(LinearRgb::new(1.0, 1.0, 1.0).is_in_gamut());
        assert!(LinearRgb::new(-0.0001, 1.0001, 0.5).is_in_gamut());
        assert!(!LinearRgb::new(-0.0002, 0.5, 0.5).is_in_gamut());
        assert!(!LinearRgb::new(0.5, 1.0002, 0.5).is_in_gamut());
        assert!(!LinearRgb::new(0.5, 0.5, f64::NAN).is_in_gamut());
    }

    #[test]
    fn test_clip() {
        let clipped = LinearRgb::new(-0.3, 0.4, 1.7).with_alpha(0.5).clip();
        assert_eq!(clipped, LinearRgb::new(0.0, 0.4, 1.0).with_alpha(0.5));
        assert!(clipped.is_in_gamut());
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(LinearRgb::new(0.1, 0.2, 0.3).with_alpha(1.5).alpha, 1.0);
        assert_eq!(LinearRgb::new(0.1, 0.2, 0.3).with_alpha(-0.5).alpha, 0.0);
    }

    #[test]
    fn test_from_srgb_preserves_alpha() {
        let linear = LinearRgb::from(Srgb::new(0.5, 0.5, 0.5).with_alpha(0.25));
        assert_eq!(linear.alpha, 0.25);
        assert!((linear.r - 0.214_041_140_5).abs() < 1e-9);
    }
}
