//! Color types and conversion utilities
//!
//! Every type here is a small immutable value; conversions are `From` impls
//! and always produce a new value.
//!
//! # Color Spaces
//!
//! - [`Srgb`]: gamma-encoded display color, serialized as hex
//! - [`LinearRgb`]: linear light; gamut membership is decided here
//! - [`Oklab`] / [`Oklch`]: perceptual space and its cylindrical form
//! - [`Xyz`] / [`CieLab`]: device-independent spaces for the ICC boundary
//!
//! # Example
//!
//! ```
//! use chroma_kernel::{LinearRgb, Oklch, Srgb};
//!
//! let display = Srgb::from_u8(128, 64, 32);
//! let lch = Oklch::from(LinearRgb::from(display));
//! let back = Srgb::from(LinearRgb::from(lch));
//! assert_eq!(back.to_bytes(), [128, 64, 32]);
//! ```

mod cie_lab;
pub mod gamma;
mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;

pub use cie_lab::{cie_lab_to_oklch, oklch_to_cie_lab, CieLab, Xyz, D65_XN, D65_YN, D65_ZN};
pub use linear_rgb::{LinearRgb, GAMUT_EPSILON};
pub use oklab::Oklab;
pub use oklch::{normalize_hue, Oklch};
pub use srgb::Srgb;
