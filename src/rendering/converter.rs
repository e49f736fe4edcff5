use std::path::Path;
use std::time::Instant;

use acep_dither::{dither, DitheredImage, Palette, PixelBuffer};
use image::DynamicImage;

use super::encode::{encode, OutputFormat};
use super::enhance::enhance_saturation;
use super::resize::resize_crop;
use crate::error::ConvertError;
use crate::models::{AppConfig, DisplaySpec};

/// Default color enhancement factor
pub const DEFAULT_SATURATION: f32 = 1.5;

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub bytes_written: usize,
    /// Pixels per palette entry, indexed like the palette
    pub histogram: Vec<usize>,
}

/// The full image-to-panel pipeline:
/// decode, cover-resize and crop, enhance, dither, encode.
#[derive(Debug, Clone)]
pub struct Converter {
    spec: DisplaySpec,
    palette: Palette,
    saturation: f32,
    preview: bool,
}

impl Converter {
    /// Converter with default saturation that writes nominal colors
    pub fn new(spec: DisplaySpec, palette: Palette) -> Self {
        Self {
            spec,
            palette,
            saturation: DEFAULT_SATURATION,
            preview: false,
        }
    }

    /// Build a converter from loaded (and possibly overridden) settings
    pub fn from_config(config: &AppConfig) -> Result<Self, ConvertError> {
        let spec = DisplaySpec::new(config.width, config.height)?;
        let palette = config.palette()?;
        Ok(Self::new(spec, palette)
            .saturation(config.saturation)
            .preview(config.preview))
    }

    /// Set the color enhancement factor
    pub fn saturation(mut self, factor: f32) -> Self {
        self.saturation = factor;
        self
    }

    /// Write measured colors instead of nominal ones
    pub fn preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn spec(&self) -> DisplaySpec {
        self.spec
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run everything between decode and encode on an in-memory image
    pub fn process(&self, img: &DynamicImage) -> Result<DitheredImage, ConvertError> {
        let DisplaySpec { width, height } = self.spec;

        let mut rgb = resize_crop(img, width, height)?;
        enhance_saturation(&mut rgb, self.saturation);
        tracing::debug!(factor = self.saturation, "Enhanced saturation");

        let mut buffer = PixelBuffer::from_rgb8(rgb.as_raw(), width as usize, height as usize)
            .map_err(acep_dither::DitherError::from)?;

        let started = Instant::now();
        let dithered = dither(&mut buffer, &self.palette)?;
        tracing::debug!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dithered"
        );
        Ok(dithered)
    }

    /// Convert `input` into a panel-ready image at `output`
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<ConversionReport, ConvertError> {
        let started = Instant::now();
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = self.spec.width,
            height = self.spec.height,
            "Converting"
        );

        let img = image::open(input).map_err(|source| ConvertError::Decode {
            path: input.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            src_width = img.width(),
            src_height = img.height(),
            "Decoded input"
        );

        let dithered = self.process(&img)?;
        let histogram = dithered.histogram();
        tracing::debug!(?histogram, "Palette usage");

        let format = OutputFormat::from_path(output);
        let bytes = encode(&dithered, format, self.preview)?;
        std::fs::write(output, &bytes)?;

        tracing::info!(
            bytes = bytes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Conversion finished"
        );

        Ok(ConversionReport {
            width: self.spec.width,
            height: self.spec.height,
            format,
            bytes_written: bytes.len(),
            histogram,
        })
    }
}
