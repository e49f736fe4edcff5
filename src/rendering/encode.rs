use std::io::Cursor;
use std::path::Path;

use acep_dither::DitheredImage;
use image::{ImageFormat, RgbImage};

use crate::error::ConvertError;

/// How a dithered image is written, chosen from the output file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Palette-indexed PNG with the output table as PLTE
    IndexedPng,
    /// 24-bit RGB in any format the `image` crate can write
    Rgb(ImageFormat),
}

impl OutputFormat {
    /// Pick the format from the path's extension
    ///
    /// Unknown or read-only extensions fall back to indexed PNG.
    pub fn from_path(path: &Path) -> Self {
        match ImageFormat::from_path(path) {
            Ok(ImageFormat::Png) => OutputFormat::IndexedPng,
            Ok(format) if format.writing_enabled() => OutputFormat::Rgb(format),
            Ok(format) => {
                tracing::warn!(
                    path = %path.display(),
                    ?format,
                    "Format cannot be written, falling back to PNG"
                );
                OutputFormat::IndexedPng
            }
            Err(_) => {
                tracing::warn!(
                    path = %path.display(),
                    "Unknown output extension, falling back to PNG"
                );
                OutputFormat::IndexedPng
            }
        }
    }
}

/// Encode a dithered image
///
/// With `preview` the measured colors are written instead of the nominal
/// ones, showing how the panel will really look.
pub fn encode(
    image: &DitheredImage,
    format: OutputFormat,
    preview: bool,
) -> Result<Vec<u8>, ConvertError> {
    match format {
        OutputFormat::IndexedPng => {
            let table = output_table(image, preview);
            encode_indexed_png(
                image.indices(),
                image.width() as u32,
                image.height() as u32,
                &table,
            )
        }
        OutputFormat::Rgb(format) => {
            let rgb = if preview {
                image.to_rgb_measured()
            } else {
                image.to_rgb_nominal()
            };
            encode_rgb(rgb, image.width() as u32, image.height() as u32, format)
        }
    }
}

/// Colors written for each palette index
fn output_table(image: &DitheredImage, preview: bool) -> Vec<[u8; 3]> {
    let palette = image.palette();
    (0..palette.len())
        .map(|i| {
            if preview {
                palette.measured(i).to_bytes()
            } else {
                palette.nominal(i)
            }
        })
        .collect()
}

/// Smallest PNG bit depth that can hold `colors` palette indices
pub fn bit_depth_for(colors: usize) -> (png::BitDepth, u8) {
    match colors {
        0..=2 => (png::BitDepth::One, 1),
        3..=4 => (png::BitDepth::Two, 2),
        5..=16 => (png::BitDepth::Four, 4),
        _ => (png::BitDepth::Eight, 8),
    }
}

/// Encode palette indices as an indexed PNG
pub fn encode_indexed_png(
    indices: &[u8],
    width: u32,
    height: u32,
    table: &[[u8; 3]],
) -> Result<Vec<u8>, ConvertError> {
    let (bit_depth, bits) = bit_depth_for(table.len());
    let packed = if bits == 8 {
        indices.to_vec()
    } else {
        pack_nbits(indices, width, bits)
    };
    let plte: Vec<u8> = table.iter().flatten().copied().collect();

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Default);
        encoder.set_palette(plte);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(&packed)
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    tracing::debug!(width, height, bits, colors = table.len(), "Encoded indexed PNG");
    Ok(buf.into_inner())
}

/// Encode packed RGB bytes in the given format
pub fn encode_rgb(
    rgb: Vec<u8>,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<Vec<u8>, ConvertError> {
    let img = RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| ConvertError::Encode("RGB buffer does not match dimensions".into()))?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;
    tracing::debug!(width, height, ?format, "Encoded RGB image");
    Ok(buf.into_inner())
}

/// Pack palette indices into N-bit PNG row data (1, 2, or 4 bits per pixel).
///
/// Rows start on a byte boundary; the last byte of a row is zero-padded.
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width.max(1) as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width.max(1) as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
