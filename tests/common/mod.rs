//! Common test infrastructure for Chromakit integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

use std::fs;
use std::path::PathBuf;

use chromakit::assets::AssetLoader;
use chromakit::commands::App;
use tempfile::TempDir;

/// Test environment: a temporary directory holding a pigment table and,
/// optionally, a config file
pub struct TestEnv {
    pub dir: TempDir,
    pub lut_path: PathBuf,
    pub config_path: PathBuf,
}

impl TestEnv {
    /// Create an environment with the synthetic pigment table and no config
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let lut_path = dir.path().join("pigment.lut");
        fs::write(&lut_path, fixtures::synthetic_lut_bytes()).expect("Failed to write LUT");
        let config_path = dir.path().join("config.yaml");
        Self {
            dir,
            lut_path,
            config_path,
        }
    }

    /// Write a config file into the environment
    pub fn with_config(self, yaml: &str) -> Self {
        fs::write(&self.config_path, yaml).expect("Failed to write config");
        self
    }

    /// App reading config from the environment (embedded if none was
    /// written) and the pigment table as if `PIGMENT_LUT` were set
    pub fn app(&self) -> App {
        let loader = AssetLoader::new(Some(self.config_path.clone()), Some(self.lut_path.clone()));
        App::from_loader(loader).expect("Failed to create app")
    }

    /// App with no pigment table configured
    pub fn app_without_lut(&self) -> App {
        let loader = AssetLoader::new(Some(self.config_path.clone()), None);
        App::from_loader(loader).expect("Failed to create app")
    }
}
