//! Asset loading with embedded fallbacks
//!
//! Two assets feed the application:
//!
//! - `config.yaml`: embedded in the binary; replaced by the file named in
//!   `CONFIG_FILE` when that file exists
//! - the pigment lookup table: never embedded; read from the path in
//!   `PIGMENT_LUT`, or from `pigment_lut` in the config
//!
//! The lookup table is read once and handed out as a shared read-only
//! [`PigmentLut`].

use chroma_kernel::PigmentLut;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::AppError;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Where a loaded asset came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => f.write_str("embedded"),
            AssetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Asset loader with optional filesystem overrides
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// Pigment table path (from PIGMENT_LUT env var)
    pigment_lut: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    pub fn new(config_file: Option<PathBuf>, pigment_lut: Option<PathBuf>) -> Self {
        Self {
            config_file,
            pigment_lut,
        }
    }

    /// Create a loader from `CONFIG_FILE` and `PIGMENT_LUT`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
            std::env::var("PIGMENT_LUT").ok().map(PathBuf::from),
        )
    }

    /// Where the config will be read from
    pub fn config_source(&self) -> AssetSource {
        match self.config_file {
            Some(ref path) if path.exists() => AssetSource::File(path.clone()),
            _ => AssetSource::Embedded,
        }
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let AssetSource::File(path) = self.config_source() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(path)?));
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Resolve the pigment table path
    ///
    /// `PIGMENT_LUT` wins over the configured path.
    pub fn pigment_lut_path(&self, configured: Option<&Path>) -> Option<PathBuf> {
        self.pigment_lut
            .clone()
            .or_else(|| configured.map(Path::to_path_buf))
    }

    /// Load the pigment table from disk
    pub fn load_pigment_lut(&self, configured: Option<&Path>) -> Result<Arc<PigmentLut>, AppError> {
        let path = self
            .pigment_lut_path(configured)
            .ok_or(AppError::LutNotConfigured)?;
        let bytes = fs::read(&path)?;
        let lut = PigmentLut::new(bytes)?;
        tracing::info!(path = %path.display(), "Loaded pigment table");
        Ok(Arc::new(lut))
    }

    /// The embedded default config, for display
    pub fn embedded_config() -> Option<String> {
        EmbeddedConfig::get("config.yaml")
            .and_then(|f| String::from_utf8(f.data.into_owned()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_present() {
        let loader = AssetLoader::default();
        assert_eq!(loader.config_source(), AssetSource::Embedded);
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("gamut:"));
        assert_eq!(AssetLoader::embedded_config(), Some(content));
    }

    #[test]
    fn test_missing_config_file_falls_back_to_embedded() {
        let loader = AssetLoader::new(Some(PathBuf::from("/nonexistent/config.yaml")), None);
        assert_eq!(loader.config_source(), AssetSource::Embedded);
        assert!(loader.read_config_string().is_ok());
    }

    #[test]
    fn test_env_path_wins_over_config() {
        let loader = AssetLoader::new(None, Some(PathBuf::from("/env/pigment.lut")));
        assert_eq!(
            loader.pigment_lut_path(Some(Path::new("/config/pigment.lut"))),
            Some(PathBuf::from("/env/pigment.lut"))
        );

        let loader = AssetLoader::default();
        assert_eq!(
            loader.pigment_lut_path(Some(Path::new("/config/pigment.lut"))),
            Some(PathBuf::from("/config/pigment.lut"))
        );
        assert_eq!(loader.pigment_lut_path(None), None);
    }

    #[test]
    fn test_unconfigured_lut() {
        let loader = AssetLoader::default();
        assert!(matches!(
            loader.load_pigment_lut(None),
            Err(AppError::LutNotConfigured)
        ));
    }

    #[test]
    fn test_asset_source_display() {
        assert_eq!(AssetSource::Embedded.to_string(), "embedded");
        assert_eq!(
            AssetSource::File(PathBuf::from("/etc/chromakit.yaml")).to_string(),
            "/etc/chromakit.yaml"
        );
    }
}
