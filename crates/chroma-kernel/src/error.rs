//! Error types for the color kernel.
//!
//! Conversions, gamut mapping and mixing are total functions and never fail.
//! Errors only arise at the edges: parsing hex strings, accepting an
//! externally supplied pigment table, and explicit input validation.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length (expected 3, 6 or 8 digits)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0:?}")]
    InvalidHex(char),
}

/// Error type for pigment lookup table construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LutError {
    /// The buffer is neither the headed nor the headerless table size.
    #[error("invalid pigment table size: {actual} bytes (expected {expected} or {headerless})")]
    InvalidLength {
        /// Size of a table including its header
        expected: usize,
        /// Size of the bare three-plane dump
        headerless: usize,
        /// Size that was supplied
        actual: usize,
    },
}

/// Error type for validating color values at an API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ColorError {
    /// A component is NaN or infinite.
    #[error("color component `{component}` is not a finite number")]
    NonFinite {
        /// Name of the offending component
        component: &'static str,
    },
}
