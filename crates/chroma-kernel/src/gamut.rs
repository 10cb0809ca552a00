//! Chroma-reduction gamut mapping.
//!
//! Maps any Oklch color into the sRGB gamut by lowering chroma only, in the
//! manner of CSS Color Level 4: binary-search the chroma axis and accept a
//! candidate when it is either in gamut or its clipped version is within a
//! just-noticeable difference of it.
//!
//! # Algorithm
//!
//! ```text
//! l >= 1            -> white          l <= 0 -> black
//! in gamut          -> direct conversion (identity)
//! otherwise         -> lo = 0, hi = C
//!                      while hi - lo > epsilon:
//!                        mid = (lo + hi) / 2
//!                        candidate = (l, mid, h)
//!                        accept if in_gamut(candidate)
//!                               or delta(candidate, clip(candidate)) <= JND
//!                        accept -> lo = mid, reject -> hi = mid
//!                      result = candidate at lo (clipped if needed)
//! ```
//!
//! With the default chroma range of 0.4 the epsilon is 0.0001, which bounds
//! the search at 12 iterations. The loop is also capped at
//! [`MAX_ITERATIONS`] and stops once the midpoint no longer moves, so a
//! non-positive epsilon or an infinite chroma still terminates.

use crate::color::{LinearRgb, Oklch, Srgb};
use crate::delta::delta;
use crate::error::ColorError;

/// Default just-noticeable difference in [`delta`] units.
pub const DEFAULT_JND: f64 = 0.02;

/// Default extent of the Oklch chroma axis searched over.
pub const DEFAULT_CHROMA_RANGE: f64 = 0.4;

/// Number of steps the chroma range is divided into to get the epsilon.
const EPSILON_DIVISIONS: f64 = 4000.0;

/// Upper bound on bisection steps for any input or configuration.
pub const MAX_ITERATIONS: u32 = 64;

/// Gamut mapper configuration.
///
/// The mapper is a plain `Copy` value holding two tuning constants; mapping
/// itself is a pure function of the input color.
///
/// # Example
///
/// ```
/// use chroma_kernel::{GamutMapper, Oklch};
///
/// let mapper = GamutMapper::new();
/// let vivid = Oklch::new(0.7, 0.4, 180.0);
/// let mapped = mapper.map_oklch(vivid);
///
/// assert_eq!(mapped.l, vivid.l);
/// assert_eq!(mapped.h, vivid.h);
/// assert!(mapped.c < vivid.c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapper {
    /// Largest acceptable delta between a candidate and its clipped form.
    ///
    /// Default: `0.02`
    pub jnd: f64,

    /// Chroma extent used to derive the search epsilon (`range / 4000`).
    ///
    /// Default: `0.4`
    pub chroma_range: f64,
}

impl Default for GamutMapper {
    fn default() -> Self {
        Self {
            jnd: DEFAULT_JND,
            chroma_range: DEFAULT_CHROMA_RANGE,
        }
    }
}

/// Outcome of one mapping: the chosen Oklch candidate and its display form.
#[derive(Debug, Clone, Copy)]
struct Mapped {
    oklch: Oklch,
    display: Srgb,
}

impl GamutMapper {
    /// Create a mapper with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the just-noticeable difference threshold.
    #[inline]
    pub fn jnd(mut self, jnd: f64) -> Self {
        self.jnd = jnd;
        self
    }

    /// Set the chroma range the search epsilon is derived from.
    #[inline]
    pub fn chroma_range(mut self, range: f64) -> Self {
        self.chroma_range = range;
        self
    }

    /// Search resolution on the chroma axis.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.chroma_range / EPSILON_DIVISIONS
    }

    /// Map a color into the sRGB gamut for display.
    ///
    /// Colors already in gamut are converted directly. Non-finite input
    /// propagates into the result; use [`try_map_to_gamut`](Self::try_map_to_gamut)
    /// at untrusted boundaries.
    pub fn map_to_gamut(&self, color: Oklch) -> Srgb {
        self.map(color).display
    }

    /// Like [`map_to_gamut`](Self::map_to_gamut), but rejects NaN and
    /// infinite components first.
    pub fn try_map_to_gamut(&self, color: Oklch) -> Result<Srgb, ColorError> {
        Ok(self.map_to_gamut(color.validate()?))
    }

    /// Map a color into gamut and return the chosen Oklch candidate.
    ///
    /// Lightness, hue and alpha are returned unchanged; only chroma may be
    /// lower than the input's. Converting the result for display may still
    /// require clipping by less than the JND.
    pub fn map_oklch(&self, color: Oklch) -> Oklch {
        self.map(color).oklch
    }

    /// Whether the color converts to sRGB without leaving the gamut.
    #[inline]
    pub fn is_in_gamut(color: Oklch) -> bool {
        LinearRgb::from(color).is_in_gamut()
    }

    fn map(&self, color: Oklch) -> Mapped {
        if color.l >= 1.0 {
            return Mapped {
                oklch: color.with_chroma(0.0),
                display: Srgb::white(color.alpha),
            };
        }
        if color.l <= 0.0 {
            return Mapped {
                oklch: color.with_chroma(0.0),
                display: Srgb::black(color.alpha),
            };
        }

        let direct = LinearRgb::from(color);
        if direct.is_in_gamut() {
            return Mapped {
                oklch: color,
                display: Srgb::from(direct),
            };
        }

        let epsilon = self.epsilon();
        let mut lo = 0.0;
        let mut hi = color.c;
        let mut iterations = 0u32;

        while hi - lo > epsilon && iterations < MAX_ITERATIONS {
            iterations += 1;
            let chroma = (lo + hi) / 2.0;
            // Adjacent floats: the interval cannot shrink further.
            if chroma <= lo || chroma >= hi {
                break;
            }
            let candidate = color.with_chroma(chroma);
            let linear = LinearRgb::from(candidate);

            if linear.is_in_gamut() || self.clip_is_acceptable(candidate, linear) {
                lo = chroma;
            } else {
                hi = chroma;
            }
        }

        let oklch = color.with_chroma(lo);
        let linear = LinearRgb::from(oklch);
        let display = if linear.is_in_gamut() {
            Srgb::from(linear)
        } else {
            Srgb::from(linear.clip())
        };

        tracing::trace!(
            l = color.l,
            h = color.h,
            from_chroma = color.c,
            to_chroma = lo,
            iterations,
            "gamut mapped"
        );

        Mapped { oklch, display }
    }

    fn clip_is_acceptable(&self, candidate: Oklch, linear: LinearRgb) -> bool {
        let clipped = Oklch::from(linear.clip());
        delta(candidate, clipped) <= self.jnd
    }
}

/// Map a color into the sRGB gamut with the default mapper.
pub fn map_to_gamut(color: Oklch) -> Srgb {
    GamutMapper::default().map_to_gamut(color)
}
