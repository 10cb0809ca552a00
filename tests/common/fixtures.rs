//! Test fixtures and constants.

use chroma_kernel::pigment::{GRID_SIZE, HEADER_LEN, LUT_LEN, PLANE_LEN};

/// Colors used across tests
pub mod colors {
    /// Yellow paint
    pub const YELLOW: &str = "#fce300";

    /// Blue paint
    pub const BLUE: &str = "#0021ab";

    /// In-gamut sky blue
    pub const SKY: &str = "oklch(0.7 0.15 240)";

    /// Hex of [`SKY`]
    pub const SKY_HEX: &str = "#26a9f1";

    /// Maximally saturated cyan, outside sRGB
    pub const VIVID_CYAN: &str = "oklch(0.7 0.4 180)";
}

/// Synthetic pigment table
///
/// The yellow corner of the RGB cube is pure yellow pigment (plane 1), the
/// blue corner pure blue pigment (plane 0), the rest white.
pub fn synthetic_lut_bytes() -> Vec<u8> {
    let mut bytes = vec![0u8; LUT_LEN];
    for z in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let cell = x + y * GRID_SIZE + z * GRID_SIZE * GRID_SIZE;
                if x >= 48 && y >= 48 && z < 16 {
                    bytes[HEADER_LEN + PLANE_LEN + cell] = 255;
                } else if z >= 32 && x < 16 && y < 32 {
                    bytes[HEADER_LEN + cell] = 255;
                }
            }
        }
    }
    bytes
}

/// The same table without its header
pub fn headerless_lut_bytes() -> Vec<u8> {
    synthetic_lut_bytes().split_off(HEADER_LEN)
}
