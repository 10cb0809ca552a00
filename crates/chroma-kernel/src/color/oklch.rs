//! Oklch cylindrical color space
//!
//! Oklch is the polar form of Oklab, representing colors as:
//! - **L** (Lightness): Same as Oklab L
//! - **C** (Chroma): Colorfulness (distance from the neutral axis)
//! - **h** (Hue): Hue angle in degrees, normalized to `[0, 360)`
//!
//! Gamut mapping only ever moves along the chroma axis, so lightness and hue
//! of a mapped color are exactly those of the input.

use std::fmt;

use super::linear_rgb::LinearRgb;
use super::oklab::Oklab;
use super::srgb::Srgb;
use crate::error::ColorError;

/// Fold any finite angle into `[0, 360)`.
///
/// `rem_euclid` can round a tiny negative angle up to exactly `360.0`;
/// that case folds to `0.0`.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Oklch: polar form of Oklab (Lightness, Chroma, Hue).
///
/// # Note
///
/// For achromatic colors (c near zero), hue is undefined. Conversion from
/// Oklab yields whatever `atan2` produces (0.0 for exact grays); callers
/// must not rely on hue when chroma is ~0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white)
    pub l: f64,
    /// Chroma: distance from neutral axis, >= 0.0 (about 0.4 at most in sRGB)
    pub c: f64,
    /// Hue angle in degrees, `[0, 360)`
    pub h: f64,
    /// Opacity, 0.0..=1.0
    pub alpha: f64,
}

impl Oklch {
    /// Create a new opaque Oklch color.
    ///
    /// Hue is normalized into `[0, 360)` and negative chroma floors to zero.
    ///
    /// ```
    /// use chroma_kernel::Oklch;
    ///
    /// let color = Oklch::new(0.7, 0.15, -120.0);
    /// assert_eq!(color.h, 240.0);
    /// ```
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l,
            c: if c < 0.0 { 0.0 } else { c },
            h: normalize_hue(h),
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

    /// Return a copy with a different chroma; lightness and hue unchanged.
    #[inline]
    pub fn with_chroma(self, c: f64) -> Self {
        Self {
            c: if c < 0.0 { 0.0 } else { c },
            ..self
        }
    }

    /// Return a copy with a different lightness.
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    /// Return a copy with a different (normalized) hue.
    #[inline]
    pub fn with_hue(self, h: f64) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    /// Reject NaN and infinite components.
    ///
    /// The conversion functions themselves propagate non-finite values; this
    /// is for callers that accept colors from outside the process.
    pub fn validate(self) -> Result<Self, ColorError> {
        let components = [
            ("lightness", self.l),
            ("chroma", self.c),
            ("hue", self.h),
            ("alpha", self.alpha),
        ];
        match components.iter().find(|(_, v)| !v.is_finite()) {
            Some(&(component, _)) => Err(ColorError::NonFinite { component }),
            None => Ok(self),
        }
    }
}

impl From<Oklab> for Oklch {
    /// Convert from Oklab to Oklch (Cartesian to polar).
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = normalize_hue(lab.b.atan2(lab.a).to_degrees());
        Self {
            l: lab.l,
            c,
            h,
            alpha: lab.alpha,
        }
    }
}

impl From<Oklch> for Oklab {
    /// Convert from Oklch to Oklab (polar to Cartesian).
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self {
            l: lch.l,
            a: lch.c * h.cos(),
            b: lch.c * h.sin(),
            alpha: lch.alpha,
        }
    }
}

impl From<Oklch> for LinearRgb {
    fn from(lch: Oklch) -> Self {
        LinearRgb::from(Oklab::from(lch))
    }
}

impl From<LinearRgb> for Oklch {
    fn from(rgb: LinearRgb) -> Self {
        Oklch::from(Oklab::from(rgb))
    }
}

impl From<Oklch> for Srgb {
    /// Direct conversion without gamut mapping; channels may fall outside
    /// `0.0..=1.0`. Use [`GamutMapper`](crate::GamutMapper) for display.
    fn from(lch: Oklch) -> Self {
        Srgb::from(LinearRgb::from(lch))
    }
}

impl From<Srgb> for Oklch {
    fn from(srgb: Srgb) -> Self {
        Oklch::from(LinearRgb::from(srgb))
    }
}

impl fmt::Display for Oklch {
    /// CSS Color 4 notation, e.g. `oklch(70% 0.15 240)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({}% {} {}",
            round_to(self.l * 100.0, 2),
            round_to(self.c, 4),
            round_to(self.h, 2)
        )?;
        if self.alpha < 1.0 {
            write!(f, " / {}", round_to(self.alpha, 3))?;
        }
        f.write_str(")")
    }
}

fn round_to(v: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    // Adding 0.0 turns a rounded -0.0 into 0.0 for display.
    (v * scale).round() / scale + 0.0
}
