use crate::assets::AssetLoader;
use chroma_kernel::gamut::{DEFAULT_CHROMA_RANGE, DEFAULT_JND};
use chroma_kernel::GamutMapper;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the pigment lookup table
    #[serde(default)]
    pub pigment_lut: Option<PathBuf>,

    /// Gamut mapping settings
    #[serde(default)]
    pub gamut: GamutConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Gamut mapper tuning
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct GamutConfig {
    /// Just-noticeable difference accepted when clipping
    #[serde(default = "default_jnd")]
    pub jnd: f64,

    /// Chroma range the search epsilon is derived from
    #[serde(default = "default_chroma_range")]
    pub chroma_range: f64,
}

fn default_jnd() -> f64 {
    DEFAULT_JND
}

fn default_chroma_range() -> f64 {
    DEFAULT_CHROMA_RANGE
}

impl Default for GamutConfig {
    fn default() -> Self {
        Self {
            jnd: DEFAULT_JND,
            chroma_range: DEFAULT_CHROMA_RANGE,
        }
    }
}

impl GamutConfig {
    /// Replace out-of-range settings with their defaults
    ///
    /// `chroma_range` must be finite and positive, `jnd` finite and not
    /// negative.
    pub fn validated(self) -> Self {
        let mut config = self;
        if !(config.chroma_range.is_finite() && config.chroma_range > 0.0) {
            tracing::warn!(
                chroma_range = config.chroma_range,
                "Invalid gamut.chroma_range, using default"
            );
            config.chroma_range = DEFAULT_CHROMA_RANGE;
        }
        if !(config.jnd.is_finite() && config.jnd >= 0.0) {
            tracing::warn!(jnd = config.jnd, "Invalid gamut.jnd, using default");
            config.jnd = DEFAULT_JND;
        }
        config
    }

    /// Build a mapper with these settings
    pub fn mapper(&self) -> GamutMapper {
        GamutMapper::new()
            .jnd(self.jnd)
            .chroma_range(self.chroma_range)
    }
}

/// How reports are printed
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output settings
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Emit `#rrggbbaa` instead of `#rrggbb`
    #[serde(default)]
    pub alpha: bool,
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let mut config: Self = config;
                    config.gamut = config.gamut.validated();
                    tracing::info!(
                        source = %loader.config_source(),
                        jnd = config.gamut.jnd,
                        chroma_range = config.gamut.chroma_range,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.pigment_lut, None);
        assert_eq!(config.gamut.jnd, 0.02);
        assert_eq!(config.gamut.chroma_range, 0.4);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.alpha);
    }

    #[test]
    fn test_embedded_config_matches_defaults() {
        let config = AppConfig::load_from_assets(&AssetLoader::default());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
pigment_lut: /opt/pigment.lut
gamut:
  jnd: 0.05
  chroma_range: 0.5
output:
  format: json
  alpha: true
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.pigment_lut, Some(PathBuf::from("/opt/pigment.lut")));
        assert_eq!(config.gamut.jnd, 0.05);
        assert_eq!(config.gamut.chroma_range, 0.5);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.alpha);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("gamut:\n  jnd: 0.01\n").unwrap();
        assert_eq!(config.gamut.jnd, 0.01);
        assert_eq!(config.gamut.chroma_range, 0.4);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("output:\n  format: xml\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_gamut_settings_fall_back() {
        let config = GamutConfig {
            jnd: -1.0,
            chroma_range: 0.0,
        }
        .validated();
        assert_eq!(config, GamutConfig::default());

        let config = GamutConfig {
            jnd: f64::NAN,
            chroma_range: f64::INFINITY,
        }
        .validated();
        assert_eq!(config, GamutConfig::default());

        let kept = GamutConfig {
            jnd: 0.0,
            chroma_range: 0.8,
        };
        assert_eq!(kept.validated(), kept);
    }

    #[test]
    fn test_gamut_config_builds_mapper() {
        let mapper = GamutConfig {
            jnd: 0.03,
            chroma_range: 0.8,
        }
        .mapper();
        assert_eq!(mapper.jnd, 0.03);
        assert_eq!(mapper.chroma_range, 0.8);
    }
}
