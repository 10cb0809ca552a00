//! Command implementations and their reports
//!
//! Each command returns a plain `Serialize` report; [`render`] turns it into
//! aligned text or JSON. Nothing here prints, so the binary and the tests
//! share the same code path.

use chroma_kernel::{
    delta, gradient, lerp, oklch_to_cie_lab, GamutMapper, LinearRgb, Oklab, Oklch,
    PigmentMixer, Srgb, Xyz,
};
use serde::Serialize;
use std::sync::OnceLock;

use crate::assets::AssetLoader;
use crate::error::AppError;
use crate::input::{ColorInput, ColorParser};
use crate::models::{AppConfig, OutputFormat};

/// A command result that can be printed as text or JSON
pub trait Report: Serialize {
    /// `(label, value)` rows for text output
    fn rows(&self) -> Vec<(&'static str, String)>;
}

/// Render a report in the requested format
pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            let rows = report.rows();
            let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            Ok(rows
                .into_iter()
                .map(|(label, value)| format!("{label:<width$}  {value}\n"))
                .collect())
        }
    }
}

/// Oklch as written in reports
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OklchValue {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: f64,
    pub css: String,
}

impl From<Oklch> for OklchValue {
    fn from(color: Oklch) -> Self {
        Self {
            l: color.l,
            c: color.c,
            h: color.h,
            alpha: color.alpha,
            css: color.to_string(),
        }
    }
}

fn triple(values: [f64; 3]) -> String {
    format!("{:.4} {:.4} {:.4}", values[0], values[1], values[2])
}

/// `convert`: one color in every representation
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    pub input: String,
    pub hex: String,
    pub in_gamut: bool,
    pub srgb: [f64; 3],
    pub linear_rgb: [f64; 3],
    pub oklab: [f64; 3],
    pub oklch: OklchValue,
    pub xyz: [f64; 3],
    pub cie_lab: [f64; 3],
}

impl Report for ConvertReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input.clone()),
            ("hex", self.hex.clone()),
            ("in gamut", self.in_gamut.to_string()),
            ("srgb", triple(self.srgb)),
            ("linear rgb", triple(self.linear_rgb)),
            ("oklab", triple(self.oklab)),
            ("oklch", self.oklch.css.clone()),
            ("xyz", triple(self.xyz)),
            ("cie lab", triple(self.cie_lab)),
        ]
    }
}

/// `gamut`: chroma reduction into sRGB
#[derive(Debug, Clone, Serialize)]
pub struct GamutReport {
    pub input: String,
    pub in_gamut: bool,
    pub original: OklchValue,
    pub mapped: OklchValue,
    pub hex: String,
    pub jnd: f64,
}

impl Report for GamutReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("input", self.input.clone()),
            ("in gamut", self.in_gamut.to_string()),
            ("original", self.original.css.clone()),
            ("mapped", self.mapped.css.clone()),
            ("hex", self.hex.clone()),
        ]
    }
}

/// `mix`: subtractive pigment mix, with the additive blend for comparison
#[derive(Debug, Clone, Serialize)]
pub struct MixReport {
    pub colors: Vec<String>,
    pub weights: Vec<f64>,
    pub hex: String,
    pub oklch: OklchValue,
    pub additive_hex: String,
}

impl Report for MixReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let weights = self
            .weights
            .iter()
            .map(|w| w.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        vec![
            ("colors", self.colors.join(", ")),
            ("weights", weights),
            ("hex", self.hex.clone()),
            ("oklch", self.oklch.css.clone()),
            ("additive", self.additive_hex.clone()),
        ]
    }
}

/// One sample of an interpolation
#[derive(Debug, Clone, Serialize)]
pub struct LerpStop {
    pub t: f64,
    pub oklch: OklchValue,
    pub hex: String,
}

/// `lerp`: perceptual interpolation or gradient
#[derive(Debug, Clone, Serialize)]
pub struct LerpReport {
    pub from: String,
    pub to: String,
    pub stops: Vec<LerpStop>,
}

impl Report for LerpReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("from", self.from.clone()), ("to", self.to.clone())];
        for stop in &self.stops {
            rows.push(("stop", format!("{:.3}  {}  {}", stop.t, stop.hex, stop.oklch.css)));
        }
        rows
    }
}

/// `delta`: perceptual distance
#[derive(Debug, Clone, Serialize)]
pub struct DeltaReport {
    pub a: String,
    pub b: String,
    pub delta: f64,
    pub jnd: f64,
    pub noticeable: bool,
}

impl Report for DeltaReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("a", self.a.clone()),
            ("b", self.b.clone()),
            ("delta", format!("{:.6}", self.delta)),
            ("noticeable", self.noticeable.to_string()),
        ]
    }
}

/// Status shown when no command is given
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub version: String,
    pub config_source: String,
    pub pigment_lut: Option<String>,
    pub pigment_lut_loaded: bool,
    pub jnd: f64,
    pub chroma_range: f64,
    pub output_format: OutputFormat,
}

impl Report for StatusReport {
    fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("version", self.version.clone()),
            ("config", self.config_source.clone()),
            (
                "pigment lut",
                match (&self.pigment_lut, self.pigment_lut_loaded) {
                    (Some(path), true) => path.clone(),
                    (Some(path), false) => format!("{path} (unreadable)"),
                    (None, _) => "(not set)".to_string(),
                },
            ),
            ("jnd", self.jnd.to_string()),
            ("chroma range", self.chroma_range.to_string()),
        ]
    }
}

/// Shared state for running commands
pub struct App {
    config: AppConfig,
    loader: AssetLoader,
    parser: ColorParser,
    mapper: GamutMapper,
    mixer: OnceLock<PigmentMixer>,
}

impl App {
    pub fn new(config: AppConfig, loader: AssetLoader) -> Result<Self, AppError> {
        Ok(Self {
            mapper: config.gamut.mapper(),
            parser: ColorParser::new()?,
            mixer: OnceLock::new(),
            config,
            loader,
        })
    }

    /// Load configuration through `loader` and build the app
    pub fn from_loader(loader: AssetLoader) -> Result<Self, AppError> {
        let config = AppConfig::load_from_assets(&loader);
        Self::new(config, loader)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn hex(&self, color: Srgb) -> String {
        if self.config.output.alpha {
            color.to_hex_with_alpha()
        } else {
            color.to_hex()
        }
    }

    /// Display form of an argument: hex input is used as given, anything
    /// else is gamut-mapped.
    fn display(&self, input: ColorInput) -> Srgb {
        match input {
            ColorInput::Hex(srgb) => srgb,
            other => self.mapper.map_to_gamut(other.to_oklch()),
        }
    }

    /// The mixer, loading the pigment table on first use
    fn mixer(&self) -> Result<&PigmentMixer, AppError> {
        if let Some(mixer) = self.mixer.get() {
            return Ok(mixer);
        }
        let lut = self
            .loader
            .load_pigment_lut(self.config.pigment_lut.as_deref())?;
        Ok(self.mixer.get_or_init(|| PigmentMixer::new(lut)))
    }

    pub fn convert(&self, input: &str) -> Result<ConvertReport, AppError> {
        let parsed = self.parser.parse(input)?;
        let oklch = parsed.to_oklch();
        let linear = LinearRgb::from(oklch);
        let srgb = match parsed {
            ColorInput::Hex(srgb) => srgb,
            _ => Srgb::from(linear),
        };
        let oklab = Oklab::from(oklch);
        let xyz = Xyz::from(linear);
        let lab = oklch_to_cie_lab(oklch);

        tracing::debug!(input, "convert");
        Ok(ConvertReport {
            input: input.to_string(),
            hex: self.hex(self.display(parsed)),
            in_gamut: linear.is_in_gamut(),
            srgb: [srgb.r, srgb.g, srgb.b],
            linear_rgb: [linear.r, linear.g, linear.b],
            oklab: [oklab.l, oklab.a, oklab.b],
            oklch: oklch.into(),
            xyz: [xyz.x, xyz.y, xyz.z],
            cie_lab: [lab.l, lab.a, lab.b],
        })
    }

    pub fn gamut(&self, input: &str) -> Result<GamutReport, AppError> {
        let oklch = self.parser.parse(input)?.to_oklch();
        let display = self.mapper.try_map_to_gamut(oklch)?;
        let mapped = self.mapper.map_oklch(oklch);

        tracing::debug!(input, from = oklch.c, to = mapped.c, "gamut");
        Ok(GamutReport {
            input: input.to_string(),
            in_gamut: GamutMapper::is_in_gamut(oklch),
            original: oklch.into(),
            mapped: mapped.into(),
            hex: self.hex(display),
            jnd: self.mapper.jnd,
        })
    }

    /// Mix pigments
    ///
    /// Two colors without weights mix at `ratio` (default 0.5). Otherwise
    /// every color is weighted, equally unless `weights` are given. A ratio
    /// is only accepted for exactly two unweighted colors.
    pub fn mix(
        &self,
        colors: &[String],
        ratio: Option<f64>,
        weights: Option<&[f64]>,
    ) -> Result<MixReport, AppError> {
        if ratio.is_some() && (colors.len() != 2 || weights.is_some()) {
            return Err(AppError::RatioNeedsPair {
                colors: colors.len(),
            });
        }

        let displays = colors
            .iter()
            .map(|c| Ok(self.display(self.parser.parse(c)?)))
            .collect::<Result<Vec<Srgb>, AppError>>()?;
        let mixer = self.mixer()?;

        let (mixed, weights) = match (displays.as_slice(), weights) {
            ([a, b], None) => {
                let t = ratio.unwrap_or(0.5);
                if !(0.0..=1.0).contains(&t) {
                    return Err(AppError::InvalidRatio(t));
                }
                (mixer.mix(*a, *b, t), vec![1.0 - t, t])
            }
            (_, weights) => {
                let weights = weights
                    .map(<[f64]>::to_vec)
                    .unwrap_or_else(|| vec![1.0; displays.len()]);
                if weights.len() != displays.len() {
                    return Err(AppError::WeightCount {
                        colors: displays.len(),
                        weights: weights.len(),
                    });
                }
                let pairs: Vec<(Srgb, f64)> =
                    displays.iter().copied().zip(weights.iter().copied()).collect();
                let mixed = mixer.mix_many(&pairs).ok_or(AppError::InvalidWeights)?;
                (mixed, weights)
            }
        };

        tracing::debug!(count = colors.len(), "mix");
        Ok(MixReport {
            colors: colors.to_vec(),
            hex: self.hex(mixed),
            oklch: Oklch::from(mixed).into(),
            additive_hex: self.hex(additive_blend(&displays, &weights)),
            weights,
        })
    }

    /// Interpolate between two colors at `t`, or sample `steps` stops
    pub fn lerp(
        &self,
        from: &str,
        to: &str,
        t: f64,
        steps: Option<usize>,
    ) -> Result<LerpReport, AppError> {
        let a = self.parser.parse(from)?.to_oklch();
        let b = self.parser.parse(to)?.to_oklch();

        let stops: Vec<(f64, Oklch)> = match steps {
            Some(n) => {
                let last = n.saturating_sub(1).max(1) as f64;
                gradient(a, b, n)
                    .into_iter()
                    .enumerate()
                    .map(|(i, color)| (i as f64 / last, color))
                    .collect()
            }
            None => {
                if !(0.0..=1.0).contains(&t) {
                    return Err(AppError::InvalidRatio(t));
                }
                vec![(t, lerp(a, b, t))]
            }
        };

        tracing::debug!(from, to, stops = stops.len(), "lerp");
        Ok(LerpReport {
            from: from.to_string(),
            to: to.to_string(),
            stops: stops
                .into_iter()
                .map(|(t, color)| LerpStop {
                    t,
                    oklch: color.into(),
                    hex: self.hex(self.mapper.map_to_gamut(color)),
                })
                .collect(),
        })
    }

    pub fn delta(&self, a: &str, b: &str) -> Result<DeltaReport, AppError> {
        let ca = self.parser.parse(a)?.to_oklch();
        let cb = self.parser.parse(b)?.to_oklch();
        let d = delta(ca, cb);

        tracing::debug!(a, b, delta = d, "delta");
        Ok(DeltaReport {
            a: a.to_string(),
            b: b.to_string(),
            delta: d,
            jnd: self.mapper.jnd,
            noticeable: d > self.mapper.jnd,
        })
    }

    pub fn status(&self) -> StatusReport {
        let lut_path = self
            .loader
            .pigment_lut_path(self.config.pigment_lut.as_deref());
        let loaded = lut_path.is_some() && self.mixer().is_ok();

        StatusReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config_source: self.loader.config_source().to_string(),
            pigment_lut: lut_path.map(|p| p.display().to_string()),
            pigment_lut_loaded: loaded,
            jnd: self.mapper.jnd,
            chroma_range: self.mapper.chroma_range,
            output_format: self.config.output.format,
        }
    }
}

/// Weighted average in linear light, as a screen would blend
fn additive_blend(colors: &[Srgb], weights: &[f64]) -> Srgb {
    let total: f64 = weights.iter().sum();
    let mut acc = [0.0; 4];
    for (color, w) in colors.iter().zip(weights) {
        let linear = LinearRgb::from(*color);
        let w = w / total;
        acc[0] += w * linear.r;
        acc[1] += w * linear.g;
        acc[2] += w * linear.b;
        acc[3] += w * linear.alpha;
    }
    Srgb::from(LinearRgb::new(acc[0], acc[1], acc[2]).with_alpha(acc[3]))
}
