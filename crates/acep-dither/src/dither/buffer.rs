//! Pixel and index grids.
//!
//! Both grids are stored row-major in a flat `Vec` with computed offsets.

use crate::api::InputError;
use crate::color::Rgb;

/// An H x W grid of working colors.
///
/// This is the error accumulator of the dither engine: diffusion adds into
/// the cells of pixels that have not been visited yet. After a pass every cell
/// holds the error-adjusted value its pixel was quantized from.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap row-major pixel data.
    ///
    /// Zero dimensions are accepted here; the engine rejects them.
    ///
    /// # Errors
    ///
    /// [`InputError::SizeMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, InputError> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(InputError::SizeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// A buffer filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            pixels: vec![color; width * height],
            width,
            height,
        }
    }

    /// Build a buffer from a slice of rows.
    ///
    /// # Errors
    ///
    /// [`InputError::RaggedRow`] if a row differs in length from the first.
    ///
    /// # Example
    ///
    /// ```
    /// use acep_dither::{PixelBuffer, Rgb};
    ///
    /// let gray = Rgb::new(0.5, 0.5, 0.5);
    /// let buffer = PixelBuffer::from_rows(&[vec![gray; 3], vec![gray; 3]]).unwrap();
    /// assert_eq!((buffer.width(), buffer.height()), (3, 2));
    /// ```
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self, InputError> {
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (row, data) in rows.iter().enumerate() {
            if data.len() != width {
                return Err(InputError::RaggedRow {
                    row,
                    expected: width,
                    actual: data.len(),
                });
            }
            pixels.extend_from_slice(data);
        }

        Ok(Self {
            pixels,
            width,
            height: rows.len(),
        })
    }

    /// Normalize packed 8-bit RGB data (`[R, G, B, R, G, B, ...]`) by
    /// dividing each channel by 255.
    ///
    /// # Errors
    ///
    /// [`InputError::SizeMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb8(bytes: &[u8], width: usize, height: usize) -> Result<Self, InputError> {
        let expected = width.checked_mul(height).and_then(|n| n.checked_mul(3));
        if expected != Some(bytes.len()) {
            return Err(InputError::SizeMismatch {
                width,
                height,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::from_u8(px[0], px[1], px[2]))
            .collect();

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Color at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.pixels[self.offset(x, y)]
    }

    /// Mutable color at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> &mut Rgb {
        let offset = self.offset(x, y);
        &mut self.pixels[offset]
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

/// An H x W grid of palette indices, the engine's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBuffer {
    indices: Vec<u8>,
    width: usize,
    height: usize,
}

impl IndexBuffer {
    /// Allocated by the engine once its inputs are validated.
    pub(crate) fn zeroed(width: usize, height: usize) -> Self {
        Self {
            indices: vec![0; width * height],
            width,
            height,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, idx: u8) {
        self.indices[y * self.width + x] = idx;
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Index at `(x, y)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.indices[y * self.width + x]
    }

    /// All indices in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.indices
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks(self.width.max(1))
    }

    /// Consume the grid, returning the flat row-major indices.
    pub fn into_vec(self) -> Vec<u8> {
        self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        let pixels = vec![Rgb::ZERO; 6];
        assert!(PixelBuffer::new(3, 2, pixels.clone()).is_ok());
        assert_eq!(
            PixelBuffer::new(4, 2, pixels),
            Err(InputError::SizeMismatch {
                width: 4,
                height: 2,
                actual: 6
            })
        );
    }

    #[test]
    fn test_new_accepts_zero_dimensions() {
        let buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_from_rows_is_row_major() {
        let a = Rgb::new(0.1, 0.0, 0.0);
        let b = Rgb::new(0.2, 0.0, 0.0);
        let c = Rgb::new(0.3, 0.0, 0.0);
        let d = Rgb::new(0.4, 0.0, 0.0);
        let buffer = PixelBuffer::from_rows(&[vec![a, b], vec![c, d]]).unwrap();

        assert_eq!(buffer.pixels(), &[a, b, c, d]);
        assert_eq!(buffer.get(1, 0), b);
        assert_eq!(buffer.get(0, 1), c);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let row = vec![Rgb::ZERO; 3];
        let short = vec![Rgb::ZERO; 2];
        assert_eq!(
            PixelBuffer::from_rows(&[row.clone(), row, short]),
            Err(InputError::RaggedRow {
                row: 2,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let buffer = PixelBuffer::from_rows(&[]).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (0, 0));
    }

    #[test]
    fn test_from_rgb8_normalizes() {
        let bytes = [255, 0, 51, 0, 255, 102];
        let buffer = PixelBuffer::from_rgb8(&bytes, 2, 1).unwrap();
        assert_eq!(buffer.get(0, 0), Rgb::new(1.0, 0.0, 0.2));
        assert_eq!(buffer.get(1, 0), Rgb::new(0.0, 1.0, 0.4));
    }

    #[test]
    fn test_from_rgb8_checks_length() {
        assert!(matches!(
            PixelBuffer::from_rgb8(&[0; 5], 2, 1),
            Err(InputError::SizeMismatch { actual: 5, .. })
        ));
    }

    #[test]
    fn test_get_mut_accumulates() {
        let mut buffer = PixelBuffer::filled(2, 2, Rgb::ZERO);
        *buffer.get_mut(1, 1) += Rgb::new(0.25, 0.5, 0.75);
        assert_eq!(buffer.get(1, 1), Rgb::new(0.25, 0.5, 0.75));
        assert_eq!(buffer.get(0, 1), Rgb::ZERO);
    }

    #[test]
    fn test_index_buffer_layout() {
        let mut indices = IndexBuffer::zeroed(3, 2);
        indices.set(2, 0, 5);
        indices.set(0, 1, 4);

        assert_eq!(indices.get(2, 0), 5);
        assert_eq!(indices.as_slice(), &[0, 0, 5, 4, 0, 0]);
        let rows: Vec<&[u8]> = indices.rows().collect();
        assert_eq!(rows, vec![&[0, 0, 5][..], &[4, 0, 0][..]]);
        assert_eq!(indices.into_vec().len(), 6);
    }
}
