//! Perceptual color difference between two Oklch colors.
//!
//! Used by the gamut mapper to decide whether clipping a candidate color is
//! visually acceptable.

use crate::color::Oklch;

/// Perceptual distance between two Oklch colors.
///
/// `sqrt(dL² + dC² + dH²)` where the hue term is weighted by chroma:
/// `dH = 2·sqrt(C1·C2)·sin(Δh/2)`. The hue term vanishes when either chroma
/// is zero, so the arbitrary hue of a gray never contributes.
///
/// Symmetric: `delta(a, b) == delta(b, a)`.
///
/// # Example
///
/// ```
/// use chroma_kernel::{delta, Oklch};
///
/// let a = Oklch::new(0.5, 0.1, 30.0);
/// let gray = Oklch::new(0.5, 0.0, 270.0);
/// assert!((delta(a, gray) - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn delta(a: Oklch, b: Oklch) -> f64 {
    let dl = a.l - b.l;
    let dc = a.c - b.c;
    let dh = if a.c > 0.0 && b.c > 0.0 {
        2.0 * (a.c * b.c).sqrt() * ((a.h - b.h) / 2.0).to_radians().sin()
    } else {
        0.0
    };
    (dl * dl + dc * dc + dh * dh).sqrt()
}
