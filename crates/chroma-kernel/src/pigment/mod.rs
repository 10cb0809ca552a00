//! Subtractive pigment mixing
//!
//! Additive blending of yellow and blue in RGB yields gray. Real paint
//! yields green because pigments absorb light. This module approximates
//! that behavior with a latent pigment model:
//!
//! 1. [`PigmentLut`] maps an RGB color to concentrations of four base
//!    pigments (the fourth is implied: concentrations sum to 1).
//! 2. A fixed cubic model predicts the RGB of any concentration mix.
//! 3. [`PigmentMixer`] interpolates concentrations together with the
//!    model's residual error, then evaluates the model again.
//!
//! The table is supplied by the caller (see [`PigmentLut::new`]) and shared
//! read-only between mixers.

mod lut;
mod mixer;
mod polynomial;

pub use lut::{PigmentLut, GRID_SIZE, HEADER_LEN, LUT_LEN, PLANE_LEN};
pub use mixer::PigmentMixer;

#[cfg(test)]
pub(crate) mod test_support {
    use super::{PigmentLut, GRID_SIZE, HEADER_LEN, LUT_LEN, PLANE_LEN};

    /// A small stand-in table: the yellow corner of the RGB cube is pure
    /// yellow pigment, the blue corner pure blue pigment, everything else
    /// white.
    pub(crate) fn synthetic_lut() -> PigmentLut {
        let mut bytes = vec![0u8; LUT_LEN];
        for z in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                for x in 0..GRID_SIZE {
                    let cell = x + y * GRID_SIZE + z * GRID_SIZE * GRID_SIZE;
                    let plane = if x >= 48 && y >= 48 && z < 16 {
                        Some(1)
                    } else if z >= 32 && x < 16 && y < 32 {
                        Some(0)
                    } else {
                        None
                    };
                    if let Some(plane) = plane {
                        bytes[HEADER_LEN + plane * PLANE_LEN + cell] = 255;
                    }
                }
            }
        }
        PigmentLut::new(bytes).expect("synthetic table has the full layout")
    }
}
