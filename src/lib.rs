//! epaper-convert - prepare images for 7-color ACeP e-paper panels.
//!
//! Decodes an image, cover-resizes and center-crops it to the panel size,
//! boosts saturation, dithers it against the panel's measured colors and
//! writes the result using the nominal colors the controller expects.
//! This library exposes the pipeline for the binary and for integration tests.

pub mod error;
pub mod models;
pub mod rendering;

pub use error::{ConfigError, ConvertError};
pub use models::{AppConfig, DisplaySpec, Overrides};
pub use rendering::{ConversionReport, Converter};
