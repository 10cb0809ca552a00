//! Pigment concentration lookup table
//!
//! The table maps a 64×64×64 grid over the RGB cube to the concentrations of
//! the first three pigments. Storage layout:
//!
//! ```text
//! offset 0        192-byte header (unused by sampling)
//! offset 192      plane c0: 64³ bytes, index = x + 64·y + 4096·z
//! offset 192+64³  plane c1
//! offset 192+2·64³ plane c2
//! ```
//!
//! Each byte is a concentration scaled by 255.

use crate::error::LutError;

/// Bytes preceding the first concentration plane.
pub const HEADER_LEN: usize = 192;
/// Grid cells along each RGB axis.
pub const GRID_SIZE: usize = 64;
/// Bytes in one concentration plane (64³).
pub const PLANE_LEN: usize = GRID_SIZE * GRID_SIZE * GRID_SIZE;
/// Total size of a table including its header.
pub const LUT_LEN: usize = HEADER_LEN + 3 * PLANE_LEN;

const STEP_X: usize = 1;
const STEP_Y: usize = GRID_SIZE;
const STEP_Z: usize = GRID_SIZE * GRID_SIZE;
const INDEX_MASK: usize = PLANE_LEN - 1;

/// Read-only pigment lookup table.
///
/// Loaded once by the application and shared between mixers, typically as
/// an `Arc<PigmentLut>`.
#[derive(Clone, PartialEq, Eq)]
pub struct PigmentLut {
    data: Box<[u8]>,
}

impl std::fmt::Debug for PigmentLut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PigmentLut")
            .field("len", &self.data.len())
            .finish()
    }
}

impl PigmentLut {
    /// Take ownership of a table buffer.
    ///
    /// Accepts either the full layout ([`LUT_LEN`] bytes) or the bare three
    /// planes without a header, in which case a zeroed header is prepended.
    pub fn new(bytes: Vec<u8>) -> Result<Self, LutError> {
        let data = match bytes.len() {
            LUT_LEN => bytes,
            len if len == 3 * PLANE_LEN => {
                let mut data = vec![0u8; HEADER_LEN];
                data.extend_from_slice(&bytes);
                data
            }
            actual => {
                return Err(LutError::InvalidLength {
                    expected: LUT_LEN,
                    headerless: 3 * PLANE_LEN,
                    actual,
                })
            }
        };
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Copy a table out of a borrowed buffer. See [`new`](Self::new).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LutError> {
        Self::new(bytes.to_vec())
    }

    /// Raw table bytes, header included.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Out-of-range reads contribute zero.
    #[inline]
    fn read(&self, index: usize) -> f64 {
        match self.data.get(index) {
            Some(&v) => f64::from(v),
            None => {
                tracing::trace!(index, len = self.data.len(), "pigment table read out of range");
                0.0
            }
        }
    }

    /// Trilinearly interpolate the first three pigment concentrations for an
    /// sRGB triple. Channels are clamped to `0.0..=1.0`.
    pub fn sample(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        let scale = (GRID_SIZE - 1) as f64;
        let x = r.clamp(0.0, 1.0) * scale;
        let y = g.clamp(0.0, 1.0) * scale;
        let z = b.clamp(0.0, 1.0) * scale;

        let (ix, iy, iz) = (x as usize, y as usize, z as usize);
        let (tx, ty, tz) = (x - ix as f64, y - iy as f64, z - iz as f64);

        let base = (ix * STEP_X + iy * STEP_Y + iz * STEP_Z) & INDEX_MASK;

        let corners = [
            (0, (1.0 - tx) * (1.0 - ty) * (1.0 - tz)),
            (STEP_X, tx * (1.0 - ty) * (1.0 - tz)),
            (STEP_Y, (1.0 - tx) * ty * (1.0 - tz)),
            (STEP_X + STEP_Y, tx * ty * (1.0 - tz)),
            (STEP_Z, (1.0 - tx) * (1.0 - ty) * tz),
            (STEP_X + STEP_Z, tx * (1.0 - ty) * tz),
            (STEP_Y + STEP_Z, (1.0 - tx) * ty * tz),
            (STEP_X + STEP_Y + STEP_Z, tx * ty * tz),
        ];

        let mut out = [0.0; 3];
        for (plane, value) in out.iter_mut().enumerate() {
            let origin = HEADER_LEN + plane * PLANE_LEN + base;
            *value = corners
                .iter()
                .map(|&(offset, weight)| weight * self.read(origin + offset))
                .sum::<f64>()
                / 255.0;
        }
        out
    }
}
