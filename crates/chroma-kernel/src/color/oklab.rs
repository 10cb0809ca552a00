//! Oklab perceptual color space
//!
//! Oklab is a perceptual color space designed for uniform color perception.
//! It sits between linear RGB and the cylindrical [`Oklch`](super::Oklch)
//! form used for gamut mapping and interpolation.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use super::linear_rgb::LinearRgb;

/// Linear sRGB to LMS cone response.
pub(crate) const RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214694707629, 0.5363325372617349, 0.0514459932675022],
    [0.2119034958178251, 0.6806995506452344, 0.1073969535369406],
    [0.0883024591900564, 0.2817188391361215, 0.6299787016738222],
];

/// Non-linear LMS to Oklab.
pub(crate) const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.2104542683093140, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.4505937096174110],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
];

/// Oklab to non-linear LMS (inverse of [`LMS_TO_LAB`]).
pub(crate) const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
];

/// LMS cone response to linear sRGB (inverse of [`RGB_TO_LMS`]).
pub(crate) const LMS_TO_RGB: [[f64; 3]; 3] = [
    [4.0767416360759583, -3.3077115392580629, 0.2309699031821043],
    [-1.2684379732850315, 2.6097573492876882, -0.3413193760026570],
    [-0.0041960761386756, -0.7034186179359362, 1.7076146940746117],
];

#[inline]
pub(crate) fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A color in Oklab perceptual color space.
///
/// # Components
///
/// - `l`: Lightness (0.0 = black, 1.0 = white for in-gamut colors)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// Values are not clamped. Out-of-gamut colors have linear RGB
/// counterparts outside `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colors
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
    /// Opacity, 0.0..=1.0
    pub alpha: f64,
}

impl Oklab {
    /// Create a new opaque Oklab color.
    ///
    /// ```
    /// use chroma_kernel::Oklab;
    ///
    /// // Create a mid-gray color (neutral, no chroma)
    /// let gray = Oklab::new(0.5, 0.0, 0.0);
    /// ```
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l,
            a,
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
}

impl From<LinearRgb> for Oklab {
    /// Convert from linear RGB to Oklab.
    ///
    /// ```
    /// use chroma_kernel::{LinearRgb, Oklab};
    ///
    /// let oklab = Oklab::from(LinearRgb::new(0.5, 0.5, 0.5));
    /// // Gray has near-zero a and b (no chroma)
    /// assert!(oklab.a.abs() < 1e-9);
    /// assert!(oklab.b.abs() < 1e-9);
    /// ```
    fn from(rgb: LinearRgb) -> Self {
        let lms = mul(&RGB_TO_LMS, [rgb.r, rgb.g, rgb.b]);
        // f64::cbrt is odd: cbrt(-x) == -cbrt(x), so out-of-gamut negative
        // cone responses keep their sign.
        let lms_ = [lms[0].cbrt(), lms[1].cbrt(), lms[2].cbrt()];
        let [l, a, b] = mul(&LMS_TO_LAB, lms_);
        Self {
            l,
            a,
            b,
            alpha: rgb.alpha,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Convert from Oklab to linear RGB.
    ///
    /// The result is not clamped. Out-of-gamut Oklab colors produce
    /// LinearRgb values outside 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        let [l_, m_, s_] = mul(&LAB_TO_LMS, [lab.l, lab.a, lab.b]);
        let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
        let [r, g, b] = mul(&LMS_TO_RGB, lms);
        LinearRgb {
            r,
            g,
            b,
            alpha: lab.alpha,
        }
    }
}
