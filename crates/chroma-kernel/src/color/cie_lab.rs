//! CIE XYZ (D65) and CIE 1976 L*a*b*
//!
//! These spaces exist for the ICC-profile boundary: a profile transform
//! consumes and produces CIE Lab, while everything else in the crate works in
//! Oklch. [`oklch_to_cie_lab`] and [`cie_lab_to_oklch`] bridge the two.

use super::linear_rgb::LinearRgb;
use super::oklab::mul;
use super::oklch::Oklch;

/// D65 reference white, X component.
pub const D65_XN: f64 = 0.95047;
/// D65 reference white, Y component.
pub const D65_YN: f64 = 1.0;
/// D65 reference white, Z component.
pub const D65_ZN: f64 = 1.08883;

/// Linear sRGB to XYZ (sRGB primaries, D65).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// XYZ (D65) to linear sRGB.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// 6/29, the breakpoint of the Lab companding function.
const DELTA: f64 = 6.0 / 29.0;

/// A color in CIE XYZ relative to the D65 white point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus, white at 0.95047
    pub x: f64,
    /// Luminance, white at 1.0
    pub y: f64,
    /// Z tristimulus, white at 1.08883
    pub z: f64,
    /// Opacity, 0.0..=1.0
    pub alpha: f64,
}

impl Xyz {
    /// Create a new opaque XYZ color.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            alpha: 1.0,
        }
    }
}

/// A color in CIE 1976 L*a*b* (D65).
///
/// `l` is in `0.0..=100.0`; `a` and `b` are roughly `-128.0..=127.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    /// Lightness, 0.0..=100.0
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
    /// Opacity, 0.0..=1.0
    pub alpha: f64,
}

impl CieLab {
    /// Create a new opaque CIE Lab color.
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

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(ft: f64) -> f64 {
    if ft > DELTA {
        ft * ft * ft
    } else {
        3.0 * DELTA * DELTA * (ft - 4.0 / 29.0)
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul(&RGB_TO_XYZ, [rgb.r, rgb.g, rgb.b]);
        Self {
            x,
            y,
            z,
            alpha: rgb.alpha,
        }
    }
}

impl From<Xyz> for LinearRgb {
    fn from(xyz: Xyz) -> Self {
        let [r, g, b] = mul(&XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z]);
        Self {
            r,
            g,
            b,
            alpha: xyz.alpha,
        }
    }
}

impl From<Xyz> for CieLab {
    fn from(xyz: Xyz) -> Self {
        let fx = lab_f(xyz.x / D65_XN);
        let fy = lab_f(xyz.y / D65_YN);
        let fz = lab_f(xyz.z / D65_ZN);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: xyz.alpha,
        }
    }
}

impl From<CieLab> for Xyz {
    fn from(lab: CieLab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;
        Self {
            x: D65_XN * lab_f_inv(fx),
            y: D65_YN * lab_f_inv(fy),
            z: D65_ZN * lab_f_inv(fz),
            alpha: lab.alpha,
        }
    }
}

/// Convert an Oklch color to CIE Lab for an ICC transform.
///
/// ```
/// use chroma_kernel::{oklch_to_cie_lab, Oklch};
///
/// let white = oklch_to_cie_lab(Oklch::new(1.0, 0.0, 0.0));
/// assert!((white.l - 100.0).abs() < 1e-3);
/// ```
pub fn oklch_to_cie_lab(color: Oklch) -> CieLab {
    CieLab::from(Xyz::from(LinearRgb::from(color)))
}

/// Convert a CIE Lab color from an ICC transform back to Oklch.
pub fn cie_lab_to_oklch(color: CieLab) -> Oklch {
    Oklch::from(LinearRgb::from(Xyz::from(color)))
}
