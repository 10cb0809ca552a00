//! Color arguments
//!
//! Accepted forms (case-insensitive, surrounding whitespace ignored):
//!
//! - `#rgb`, `#rrggbb`, `#rrggbbaa` (the `#` is optional)
//! - `oklch(L C H)` or `oklch(L C H / A)`; L as `0.7` or `70%`, H may end in `deg`
//! - `lab(L a b)` or `lab(L a b / A)`; CIE Lab, L in `0..100` or `0%..100%`
//!
//! Alpha may be a number or a percentage. Every parsed color is checked for
//! non-finite components.

use chroma_kernel::{cie_lab_to_oklch, CieLab, Oklch, Srgb};
use regex::{Captures, Regex};

use crate::error::AppError;

const NUMBER: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";

/// A color argument after parsing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    Hex(Srgb),
    Oklch(Oklch),
    Lab(CieLab),
}

impl ColorInput {
    /// The color in the working space
    pub fn to_oklch(self) -> Oklch {
        match self {
            ColorInput::Hex(srgb) => Oklch::from(srgb),
            ColorInput::Oklch(oklch) => oklch,
            ColorInput::Lab(lab) => cie_lab_to_oklch(lab),
        }
    }
}

/// Parser for color arguments
///
/// Compiles its patterns once; reuse it for every argument.
#[derive(Debug, Clone)]
pub struct ColorParser {
    oklch: Regex,
    lab: Regex,
}

impl ColorParser {
    pub fn new() -> Result<Self, AppError> {
        let args = format!(
            r"\s*({NUMBER})(%?)\s+({NUMBER})\s+({NUMBER})(?:deg)?\s*(?:/\s*({NUMBER})(%?)\s*)?\)\s*$"
        );
        Ok(Self {
            oklch: Regex::new(&format!(r"(?i)^\s*oklch\({args}"))?,
            lab: Regex::new(&format!(r"(?i)^\s*lab\({args}"))?,
        })
    }

    /// Parse one color argument
    pub fn parse(&self, input: &str) -> Result<ColorInput, AppError> {
        let parsed = if let Some(caps) = self.oklch.captures(input) {
            let [l, c, h, alpha] = Self::components(input, &caps, 100.0)?;
            ColorInput::Oklch(Oklch::new(l, c, h).with_alpha(alpha))
        } else if let Some(caps) = self.lab.captures(input) {
            let [l, a, b, alpha] = Self::components(input, &caps, 1.0)?;
            ColorInput::Lab(CieLab::new(l, a, b).with_alpha(alpha))
        } else if looks_like_hex(input) {
            ColorInput::Hex(input.parse()?)
        } else {
            return Err(AppError::UnknownColor(input.to_string()));
        };

        // Reject non-finite components.
        parsed.to_oklch().validate()?;
        tracing::trace!(input, ?parsed, "Parsed color");
        Ok(parsed)
    }

    /// Extract `[first, second, third, alpha]`; a `%` on the first component
    /// divides it by `percent_scale`.
    fn components(input: &str, caps: &Captures, percent_scale: f64) -> Result<[f64; 4], AppError> {
        let number = |i: usize| -> Result<f64, AppError> {
            let raw = caps.get(i).map_or("", |m| m.as_str());
            raw.parse::<f64>().map_err(|_| AppError::InvalidNumber {
                input: input.to_string(),
                value: raw.to_string(),
            })
        };
        let is_percent = |i: usize| caps.get(i).is_some_and(|m| m.as_str() == "%");

        let mut first = number(1)?;
        if is_percent(2) {
            first /= percent_scale;
        }

        let alpha = if caps.get(5).is_some() {
            let a = number(5)?;
            if is_percent(6) {
                a / 100.0
            } else {
                a
            }
        } else {
            1.0
        };

        Ok([first, number(3)?, number(4)?, alpha])
    }
}

/// Bare alphanumerics with an optional leading `#`; the hex parser reports
/// what is wrong with them.
fn looks_like_hex(input: &str) -> bool {
    let s = input.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> ColorParser {
        ColorParser::new().unwrap()
    }

    #[test]
    fn test_parse_hex_forms() {
        let p = parser();
        assert_eq!(
            p.parse("#26a9f1").unwrap(),
            ColorInput::Hex(Srgb::from_u8(38, 169, 241))
        );
        assert_eq!(
            p.parse("F00").unwrap(),
            ColorInput::Hex(Srgb::from_u8(255, 0, 0))
        );
        assert_eq!(
            p.parse("  #ff000080 ").unwrap(),
            ColorInput::Hex(Srgb::from_u8_alpha(255, 0, 0, 0x80))
        );
    }

    #[test]
    fn test_parse_oklch() {
        let p = parser();
        assert_eq!(
            p.parse("oklch(0.7 0.15 240)").unwrap(),
            ColorInput::Oklch(Oklch::new(0.7, 0.15, 240.0))
        );
        assert_eq!(
            p.parse("OKLCH(70% 0.15 240deg)").unwrap(),
            ColorInput::Oklch(Oklch::new(0.7, 0.15, 240.0))
        );
        assert_eq!(
            p.parse("oklch(0.5 0.1 -30 / 50%)").unwrap(),
            ColorInput::Oklch(Oklch::new(0.5, 0.1, 330.0).with_alpha(0.5))
        );
        assert_eq!(
            p.parse("oklch( .5 .1 30 / 0.25 )").unwrap(),
            ColorInput::Oklch(Oklch::new(0.5, 0.1, 30.0).with_alpha(0.25))
        );
    }

    #[test]
    fn test_parse_lab() {
        let p = parser();
        assert_eq!(
            p.parse("lab(53.24 80.09 67.2)").unwrap(),
            ColorInput::Lab(CieLab::new(53.24, 80.09, 67.2))
        );
        assert_eq!(
            p.parse("lab(50% -20 30 / 0.5)").unwrap(),
            ColorInput::Lab(CieLab::new(50.0, -20.0, 30.0).with_alpha(0.5))
        );
    }

    #[test]
    fn test_to_oklch_from_each_form() {
        let p = parser();
        let from_hex = p.parse("#ff0000").unwrap().to_oklch();
        let from_lab = p.parse("lab(53.2408 80.0925 67.2032)").unwrap().to_oklch();
        assert!((from_hex.l - from_lab.l).abs() < 1e-3);
        assert!((from_hex.c - from_lab.c).abs() < 1e-3);
        assert!((from_hex.h - from_lab.h).abs() < 0.05);
    }

    #[test]
    fn test_parse_errors() {
        let p = parser();
        assert!(matches!(
            p.parse("rgb(1, 2, 3)"),
            Err(AppError::UnknownColor(_))
        ));
        assert!(matches!(p.parse("oklch(0.5 0.1)"), Err(AppError::UnknownColor(_))));
        assert!(matches!(p.parse(""), Err(AppError::UnknownColor(_))));
        assert!(matches!(p.parse("#12345"), Err(AppError::Hex(_))));
        assert!(matches!(p.parse("#ggg"), Err(AppError::Hex(_))));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        let p = parser();
        assert!(matches!(
            p.parse("oklch(1e999 0.1 20)"),
            Err(AppError::Color(_))
        ));
    }
}
