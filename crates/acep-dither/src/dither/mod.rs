//! Floyd-Steinberg error diffusion.
//!
//! The engine walks the pixel buffer in strict raster order: rows top to
//! bottom, each row left to right, never serpentine. For every pixel it
//!
//! 1. reads the current, possibly error-adjusted, color,
//! 2. picks the nearest entry of the distance table,
//! 3. records that index,
//! 4. spreads `color - table[index]` over the unvisited neighbors with the
//!    [`FLOYD_STEINBERG`] weights.
//!
//! Accumulated values are never clamped. The pixel's own cell is left as it
//! was read, so after the pass the buffer holds each pixel's pre-quantization
//! value. Error aimed at a neighbor outside the image is discarded.
//!
//! # Example
//!
//! ```
//! use acep_dither::{dither_to_indices, Palette, PixelBuffer, Rgb};
//!
//! let palette = Palette::acep7();
//! let mut buffer = PixelBuffer::filled(4, 4, Rgb::new(0.5, 0.5, 0.5));
//! let indices = dither_to_indices(&mut buffer, palette.measured_table()).unwrap();
//!
//! assert_eq!(indices.as_slice().len(), 16);
//! assert!(indices.as_slice().iter().all(|&i| (i as usize) < palette.len()));
//! ```

mod buffer;
mod kernel;

pub use buffer::{IndexBuffer, PixelBuffer};
pub use kernel::{Kernel, FLOYD_STEINBERG};

use crate::api::{DitherError, InputError};
use crate::color::Rgb;
use crate::output::DitheredImage;
use crate::palette::{nearest_index, Palette};

/// Quantize `buffer` against `distance_table`, returning one index per pixel.
///
/// `buffer` is used as the error accumulator and is modified in place.
///
/// # Errors
///
/// Returns [`DitherError::InvalidInput`] without touching the buffer when
///
/// - either dimension of `buffer` is zero ([`InputError::EmptyBuffer`]),
/// - `distance_table` is empty ([`InputError::EmptyTable`]),
/// - `distance_table` has more than 256 entries ([`InputError::TableTooLarge`]).
pub fn dither_to_indices(
    buffer: &mut PixelBuffer,
    distance_table: &[Rgb],
) -> Result<IndexBuffer, DitherError> {
    if buffer.is_empty() {
        return Err(InputError::EmptyBuffer {
            width: buffer.width(),
            height: buffer.height(),
        }
        .into());
    }
    match distance_table.len() {
        0 => return Err(InputError::EmptyTable.into()),
        len if len > 256 => return Err(InputError::TableTooLarge { len }.into()),
        _ => {}
    }

    Ok(dither_with_kernel(buffer, distance_table, &FLOYD_STEINBERG))
}

/// Dither against a palette's measured table and keep the palette alongside
/// the indices for output mapping.
///
/// # Errors
///
/// Same conditions as [`dither_to_indices`].
pub fn dither(buffer: &mut PixelBuffer, palette: &Palette) -> Result<DitheredImage, DitherError> {
    let indices = dither_to_indices(buffer, palette.measured_table())?;
    Ok(DitheredImage::new(indices, palette.clone()))
}

/// Error diffusion loop parameterized by kernel.
///
/// Callers validate the buffer and table first; this never fails.
fn dither_with_kernel(buffer: &mut PixelBuffer, table: &[Rgb], kernel: &Kernel) -> IndexBuffer {
    let width = buffer.width();
    let height = buffer.height();
    let mut output = IndexBuffer::zeroed(width, height);
    let divisor = kernel.divisor as f64;

    for y in 0..height {
        for x in 0..width {
            let old = buffer.get(x, y);
            let idx = nearest_index(old, table);
            // Table length is capped at 256, so the index fits
            output.set(x, y, idx as u8);

            let error = old - table[idx];
            for (nx, ny, weight) in kernel.neighbors(x, y, width, height) {
                // (error * weight) / divisor, in that order, per channel
                let w = weight as f64;
                *buffer.get_mut(nx, ny) += Rgb::new(
                    error.r * w / divisor,
                    error.g * w / divisor,
                    error.b * w / divisor,
                );
            }
        }
    }

    output
}
