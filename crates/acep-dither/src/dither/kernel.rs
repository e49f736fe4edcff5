//! Error diffusion kernel definition.
//!
//! A kernel specifies how the quantization error of one pixel is spread over
//! the neighbors that have not been visited yet in raster order.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` relative to the current pixel and a
/// weight numerator. A neighbor receives `error * weight / divisor`.
///
/// Entries that fall outside the image are skipped and their share of the
/// error is dropped, so edge pixels propagate less than the full error.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (never negative, 0 = current row)
    /// - `weight`: numerator of the diffused fraction
    pub entries: &'static [(i32, i32, u8)],

    /// Denominator shared by all weights.
    pub divisor: u8,
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

impl Kernel {
    /// In-bounds neighbors of `(x, y)` in a `width` x `height` grid.
    ///
    /// Yields `(nx, ny, weight)` in entry order. Neighbors outside the grid
    /// are left out entirely; nothing is redistributed to the others.
    ///
    /// # Example
    ///
    /// ```
    /// use acep_dither::FLOYD_STEINBERG;
    ///
    /// // Last column: only bottom-left and bottom remain
    /// let n: Vec<_> = FLOYD_STEINBERG.neighbors(3, 0, 4, 2).collect();
    /// assert_eq!(n, vec![(2, 1, 3), (3, 1, 5)]);
    /// ```
    pub fn neighbors(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize, u8)> + 'static {
        let entries: &'static [(i32, i32, u8)] = self.entries;
        entries.iter().filter_map(move |&(dx, dy, weight)| {
            let nx = x.checked_add_signed(dx as isize)?;
            let ny = y.checked_add_signed(dy as isize)?;
            (nx < width && ny < height).then_some((nx, ny, weight))
        })
    }

    /// Fraction of a pixel's error propagated from `(x, y)`.
    ///
    /// 1.0 for interior pixels of a full-propagation kernel, less at the
    /// right, left and bottom edges.
    pub fn propagated_fraction(&self, x: usize, y: usize, width: usize, height: usize) -> f64 {
        let total: u32 = self
            .neighbors(x, y, width, height)
            .map(|(_, _, w)| w as u32)
            .sum();
        total as f64 / self.divisor as f64
    }
}
