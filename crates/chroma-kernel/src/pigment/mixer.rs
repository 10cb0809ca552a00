//! Latent-space pigment mixing
//!
//! A color is lifted into a 7-component latent vector: four pigment
//! concentrations from the lookup table plus the residual between the
//! color and what the cubic model predicts for those concentrations.
//! Mixing interpolates latents and maps the result back through the model,
//! so blending yellow and blue passes through green the way paint does.

use std::sync::Arc;

use super::lut::PigmentLut;
use super::polynomial;
use crate::color::{gamma, LinearRgb, Srgb};

/// Pigment concentrations `c0..c3` followed by the RGB residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Latent([f64; 7]);

impl Latent {
    fn concentrations(&self) -> [f64; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    fn residual(&self) -> [f64; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    fn lerp(&self, other: &Latent, t: f64) -> Latent {
        let mut out = [0.0; 7];
        for (i, v) in out.iter_mut().enumerate() {
            *v = self.0[i] + (other.0[i] - self.0[i]) * t;
        }
        Latent(out)
    }

    fn to_rgb(self) -> [f64; 3] {
        let predicted = polynomial::eval(self.concentrations());
        let residual = self.residual();
        [
            (predicted[0] + residual[0]).clamp(0.0, 1.0),
            (predicted[1] + residual[1]).clamp(0.0, 1.0),
            (predicted[2] + residual[2]).clamp(0.0, 1.0),
        ]
    }
}

/// Subtractive color mixer backed by a shared pigment table.
///
/// Cloning is cheap; all clones read the same table.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use chroma_kernel::{PigmentLut, PigmentMixer, Srgb};
///
/// let bytes = std::fs::read("pigment.lut").unwrap();
/// let mixer = PigmentMixer::new(Arc::new(PigmentLut::new(bytes).unwrap()));
///
/// let yellow: Srgb = "#fce300".parse().unwrap();
/// let blue: Srgb = "#0021ab".parse().unwrap();
/// let green = mixer.mix(yellow, blue, 0.5);
/// println!("{green}");
/// ```
#[derive(Debug, Clone)]
pub struct PigmentMixer {
    lut: Arc<PigmentLut>,
}

impl PigmentMixer {
    /// Create a mixer over a loaded table.
    pub fn new(lut: Arc<PigmentLut>) -> Self {
        Self { lut }
    }

    /// The table this mixer reads.
    pub fn lut(&self) -> &Arc<PigmentLut> {
        &self.lut
    }

    pub(crate) fn to_latent(&self, color: Srgb) -> Latent {
        let r = color.r.clamp(0.0, 1.0);
        let g = color.g.clamp(0.0, 1.0);
        let b = color.b.clamp(0.0, 1.0);

        let [c0, c1, c2] = self.lut.sample(r, g, b);
        let c3 = 1.0 - (c0 + c1 + c2);
        let [pr, pg, pb] = polynomial::eval([c0, c1, c2, c3]);

        Latent([c0, c1, c2, c3, r - pr, g - pg, b - pb])
    }

    /// Mix two display colors at `t` in `0.0..=1.0`.
    ///
    /// `t = 0` returns `a` and `t = 1` returns `b` (channels clamped to
    /// `0.0..=1.0`). Alpha interpolates linearly.
    pub fn mix(&self, a: Srgb, b: Srgb, t: f64) -> Srgb {
        let latent = self.to_latent(a).lerp(&self.to_latent(b), t);
        let [r, g, bl] = latent.to_rgb();
        Srgb::new(r, g, bl).with_alpha(a.alpha + (b.alpha - a.alpha) * t)
    }

    /// Mix two linear-light colors.
    ///
    /// The colors are gamma-encoded for the latent lookup and the result is
    /// decoded back to linear light.
    pub fn mix_linear(&self, a: LinearRgb, b: LinearRgb, t: f64) -> LinearRgb {
        let encode = |c: LinearRgb| {
            Srgb::new(gamma::encode(c.r), gamma::encode(c.g), gamma::encode(c.b))
                .with_alpha(c.alpha)
        };
        LinearRgb::from(self.mix(encode(a), encode(b), t))
    }

    /// Mix any number of pigments by weight.
    ///
    /// Weights are normalized by their sum. Returns `None` when the list is
    /// empty or the weights do not sum to a positive finite number.
    pub fn mix_many(&self, colors: &[(Srgb, f64)]) -> Option<Srgb> {
        let total: f64 = colors.iter().map(|&(_, w)| w).sum();
        if colors.is_empty() || !total.is_finite() || total <= 0.0 {
            return None;
        }

        let mut acc = [0.0; 7];
        let mut alpha = 0.0;
        for &(color, weight) in colors {
            let w = weight / total;
            let Latent(latent) = self.to_latent(color);
            for (sum, v) in acc.iter_mut().zip(latent) {
                *sum += w * v;
            }
            alpha += w * color.alpha;
        }

        let [r, g, b] = Latent(acc).to_rgb();
        Some(Srgb::new(r, g, b).with_alpha(alpha))
    }
}
