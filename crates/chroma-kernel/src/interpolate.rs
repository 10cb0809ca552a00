//! Perceptual interpolation in Oklch.
//!
//! Lightness, chroma and alpha interpolate linearly. Hue always travels the
//! shorter arc around the color wheel, so a blend of 350° and 10° passes
//! through 0°, not 180°.

use crate::color::{normalize_hue, Oklch};

/// Chroma below which a color's hue is treated as undefined.
pub const ACHROMATIC_THRESHOLD: f64 = 1e-4;

#[inline]
fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between two hue angles along the shortest arc.
///
/// The result is normalized into `[0, 360)`.
///
/// ```
/// use chroma_kernel::interpolate::lerp_hue;
///
/// assert_eq!(lerp_hue(350.0, 10.0, 0.5), 0.0);
/// assert_eq!(lerp_hue(10.0, 350.0, 0.25), 5.0);
/// ```
#[inline]
pub fn lerp_hue(h1: f64, h2: f64, t: f64) -> f64 {
    let dh = (h2 - h1 + 180.0).rem_euclid(360.0) - 180.0;
    normalize_hue(h1 + dh * t)
}

/// Interpolate between two Oklch colors at `t` in `0.0..=1.0`.
///
/// When one endpoint is achromatic (chroma below [`ACHROMATIC_THRESHOLD`])
/// its hue is meaningless, so the other endpoint's hue is used for the whole
/// blend. Fading a red to gray therefore stays red instead of sweeping
/// through unrelated hues.
pub fn lerp(a: Oklch, b: Oklch, t: f64) -> Oklch {
    let a_gray = a.c < ACHROMATIC_THRESHOLD;
    let b_gray = b.c < ACHROMATIC_THRESHOLD;

    let h = match (a_gray, b_gray) {
        (true, false) => b.h,
        (false, true) => a.h,
        _ => lerp_hue(a.h, b.h, t),
    };

    Oklch::new(lerp_f64(a.l, b.l, t), lerp_f64(a.c, b.c, t), h)
        .with_alpha(lerp_f64(a.alpha, b.alpha, t))
}

/// Evenly spaced samples from `a` to `b`, both endpoints included.
///
/// Fewer than two steps yields just `a`.
pub fn gradient(a: Oklch, b: Oklch, steps: usize) -> Vec<Oklch> {
    if steps < 2 {
        return vec![a];
    }
    let last = (steps - 1) as f64;
    (0..steps).map(|i| lerp(a, b, i as f64 / last)).collect()
}
