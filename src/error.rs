use chroma_kernel::{ColorError, LutError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid hex color: {0}")]
    Hex(#[from] ParseColorError),

    #[error("Unrecognized color: {0:?} (expected #hex, oklch(...) or lab(...))")]
    UnknownColor(String),

    #[error("Invalid number {value:?} in {input:?}")]
    InvalidNumber { input: String, value: String },

    #[error("Invalid color: {0}")]
    Color(#[from] ColorError),

    #[error("Pigment table error: {0}")]
    Lut(#[from] LutError),

    #[error("No pigment table configured (set PIGMENT_LUT or pigment_lut in config)")]
    LutNotConfigured,

    #[error("Invalid mix ratio {0} (expected 0.0 to 1.0)")]
    InvalidRatio(f64),

    #[error("A mix ratio needs exactly two unweighted colors, got {colors}")]
    RatioNeedsPair { colors: usize },

    #[error("{weights} weights given for {colors} colors")]
    WeightCount { colors: usize, weights: usize },

    #[error("Mix weights must sum to a positive number")]
    InvalidWeights,

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
