//! sRGB transfer functions (IEC 61966-2-1)
//!
//! Evaluated in closed form rather than through a lookup table so that the
//! encoded values match other implementations of the same curves exactly.
//! Both curves are odd functions: negative (out-of-gamut) inputs are mirrored
//! through the origin instead of being clamped.

/// Linear-light threshold below which the encode curve is linear.
const ENCODE_BREAKPOINT: f64 = 0.0031308;

/// Encoded threshold below which the decode curve is linear.
const DECODE_BREAKPOINT: f64 = 0.04045;

/// Sign with `sign(0) == 1`.
///
/// `f64::signum` already returns `1.0` for `+0.0`, but `-1.0` for `-0.0`;
/// an explicit comparison keeps both zeros positive.
#[inline]
fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Gamma-compress a linear channel value into display encoding.
///
/// # Example
///
/// ```
/// use chroma_kernel::color::gamma;
///
/// assert_eq!(gamma::encode(0.0), 0.0);
/// assert!((gamma::encode(1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn encode(linear: f64) -> f64 {
    let abs = linear.abs();
    if abs > ENCODE_BREAKPOINT {
        sign(linear) * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
    } else {
        linear * 12.92
    }
}

/// Gamma-expand a display-encoded channel value into linear light.
#[inline]
pub fn decode(encoded: f64) -> f64 {
    let abs = encoded.abs();
    if abs <= DECODE_BREAKPOINT {
        encoded / 12.92
    } else {
        sign(encoded) * ((abs + 0.055) / 1.055).powf(2.4)
    }
}
