use std::path::Path;

use acep_dither::Palette;
use serde::Deserialize;

use crate::error::ConfigError;

/// Conversion settings loaded from a YAML file
///
/// ```yaml
/// width: 800
/// height: 480
/// saturation: 1.5
/// preview: false
/// palette:
///   nominal: ["#000000", "#FFFFFF", "#008000", "#0000FF", "#FF0000", "#FFFF00", "#FF8000"]
///   measured: ["#000000", "#FFFFFF", "#006400", "#0000B4", "#B40000", "#C8C800", "#C86400"]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Output width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Output height in pixels
    #[serde(default = "default_height")]
    pub height: u32,

    /// Color enhancement factor (1.0 leaves the image unchanged)
    #[serde(default = "default_saturation")]
    pub saturation: f32,

    /// Write measured instead of nominal colors, to preview the panel
    #[serde(default)]
    pub preview: bool,

    /// Replacement palette; the ACeP default is used when absent
    #[serde(default)]
    pub palette: Option<PaletteConfig>,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    480
}

fn default_saturation() -> f32 {
    1.5
}

/// Nominal and measured colors as hex strings, index-aligned
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    pub nominal: Vec<String>,

    /// Defaults to the nominal colors
    #[serde(default)]
    pub measured: Option<Vec<String>>,
}

/// Values given on the command line; `None` leaves the config value alone
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub saturation: Option<f32>,
    pub preview: bool,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            saturation = config.saturation,
            custom_palette = config.palette.is_some(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply command-line values on top of this configuration
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(width) = overrides.width {
            self.width = width;
        }
        if let Some(height) = overrides.height {
            self.height = height;
        }
        if let Some(saturation) = overrides.saturation {
            self.saturation = saturation;
        }
        self.preview |= overrides.preview;
        self
    }

    /// Build the dither palette, falling back to the ACeP default
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let Some(cfg) = &self.palette else {
            return Ok(Palette::acep7());
        };

        let nominal: Vec<&str> = cfg.nominal.iter().map(String::as_str).collect();
        let measured: Option<Vec<&str>> = cfg
            .measured
            .as_ref()
            .map(|m| m.iter().map(String::as_str).collect());

        let palette = Palette::from_hex(&nominal, measured.as_deref())?;
        tracing::debug!(colors = palette.len(), "Using configured palette");
        Ok(palette)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            saturation: default_saturation(),
            preview: false,
            palette: None,
        }
    }
}
