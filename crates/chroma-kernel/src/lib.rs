// Color matrices and pigment coefficients are published constants; keep
// every digit as given.
#![allow(clippy::excessive_precision)]

//! chroma-kernel: deterministic color science
//!
//! Pure, stateless transforms between color representations, a gamut mapper
//! that makes any Oklch color displayable while preserving hue and
//! lightness, perceptual interpolation, and a subtractive pigment mixer.
//!
//! # Quick Start
//!
//! ```
//! use chroma_kernel::{GamutMapper, Oklch, Srgb};
//!
//! let sky = Oklch::new(0.7, 0.15, 240.0);
//! let display: Srgb = GamutMapper::new().map_to_gamut(sky);
//! assert_eq!(display.to_hex(), "#26a9f1");
//!
//! let parsed: Srgb = "#26A9F1".parse().unwrap();
//! assert_eq!(parsed.to_bytes(), display.to_bytes());
//! ```
//!
//! # Color Spaces
//!
//! | Type | Role |
//! |------|------|
//! | [`Srgb`] | Gamma-encoded display color, hex serialization |
//! | [`LinearRgb`] | Linear light, gamut membership |
//! | [`Oklab`] | Perceptual, Cartesian |
//! | [`Oklch`] | Perceptual, cylindrical; the working space |
//! | [`Xyz`] / [`CieLab`] | Device-independent, for ICC transforms |
//!
//! ```text
//! Oklch <-> Oklab <-> LinearRgb <-> Srgb  (gamma)
//!                         |
//!                        Xyz <-> CieLab
//! ```
//!
//! All conversions are `From` impls. OKLab uses the published 16-digit
//! matrices so results agree with other implementations to the last bit.
//!
//! # Gamut Mapping
//!
//! [`GamutMapper`] reduces chroma only, by binary search, accepting a
//! candidate once clipping it to sRGB changes it by less than a
//! just-noticeable difference ([`delta`] ≤ 0.02). See [`gamut`].
//!
//! # Pigment Mixing
//!
//! [`PigmentMixer`] blends colors like paint, so yellow and blue make green.
//! It needs a [`PigmentLut`] loaded by the caller. See [`pigment`].
//!
//! # Errors and Non-finite Input
//!
//! Conversions, mapping and mixing never fail; NaN propagates through the
//! arithmetic. Validate untrusted input with [`Oklch::validate`] or
//! [`GamutMapper::try_map_to_gamut`].

pub mod color;
pub mod delta;
pub mod error;
pub mod gamut;
pub mod interpolate;
pub mod pigment;


pub use color::{
    cie_lab_to_oklch, oklch_to_cie_lab, CieLab, LinearRgb, Oklab, Oklch, Srgb, Xyz,
};
pub use delta::delta;
pub use error::{ColorError, LutError, ParseColorError};
pub use gamut::{map_to_gamut, GamutMapper};
pub use interpolate::{gradient, lerp};
pub use pigment::{PigmentLut, PigmentMixer};
