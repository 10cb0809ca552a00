//! Chromakit
//!
//! Command-line front end for the `chroma-kernel` color-science crate.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod commands;
pub mod error;
pub mod input;
pub mod models;
