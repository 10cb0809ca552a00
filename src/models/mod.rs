pub mod config;

pub use config::{AppConfig, GamutConfig, OutputConfig, OutputFormat};
