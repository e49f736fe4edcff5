//! Palette struct with dual color storage and nearest-color matching.
//!
//! This module provides the core `Palette` type that stores both nominal
//! (advertised) and measured (observed) colors for an e-paper panel, plus the
//! free-standing [`nearest_index`] lookup the dither engine uses.

use std::str::FromStr;

use super::error::PaletteError;
use crate::color::Rgb;

/// Nominal 8-bit RGB of the seven ACeP colors, in canonical slot order.
///
/// These are the values the panel's documentation advertises and what
/// converted images are written with.
pub const ACEP_NOMINAL: [[u8; 3]; 7] = [
    [0, 0, 0],       // Black
    [255, 255, 255], // White
    [0, 128, 0],     // Green
    [0, 0, 255],     // Blue
    [255, 0, 0],     // Red
    [255, 255, 0],   // Yellow
    [255, 128, 0],   // Orange
];

/// Measured 8-bit RGB of the seven ACeP colors, in canonical slot order.
///
/// Calibrated appearance of each pigment on a real panel. Quantization
/// decisions are made against these.
pub const ACEP_MEASURED: [[u8; 3]; 7] = [
    [0, 0, 0],       // Black
    [255, 255, 255], // White
    [0, 100, 0],     // Green
    [0, 0, 180],     // Blue
    [180, 0, 0],     // Red
    [200, 200, 0],   // Yellow
    [200, 100, 0],   // Orange
];

/// The seven logical colors of an ACeP panel.
///
/// The discriminant is the palette index shared by the nominal and measured
/// tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    Black = 0,
    White = 1,
    Green = 2,
    Blue = 3,
    Red = 4,
    Yellow = 5,
    Orange = 6,
}

impl PaletteColor {
    /// All slots in canonical order.
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Green,
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Yellow,
        PaletteColor::Orange,
    ];

    /// Palette index of this slot.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Slot for a palette index, if it is one of the seven.
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Green => "green",
            PaletteColor::Blue => "blue",
            PaletteColor::Red => "red",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Orange => "orange",
        }
    }
}

/// Index of the table entry nearest to `color`.
///
/// Distance is squared Euclidean over the three channels. The scan runs in
/// table order and only replaces the best candidate on a strictly smaller
/// distance, so ties resolve to the lowest index.
///
/// `table` must not be empty; callers validate this before entering a pixel
/// loop.
///
/// # Example
///
/// ```
/// use acep_dither::{nearest_index, Rgb};
///
/// let table = [Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0)];
/// assert_eq!(nearest_index(Rgb::new(0.2, 0.2, 0.2), &table), 0);
/// assert_eq!(nearest_index(Rgb::new(0.8, 0.8, 0.8), &table), 1);
/// // Exactly halfway: the lower index wins
/// assert_eq!(nearest_index(Rgb::new(0.5, 0.5, 0.5), &table), 0);
/// ```
#[inline]
pub fn nearest_index(color: Rgb, table: &[Rgb]) -> usize {
    debug_assert!(!table.is_empty(), "nearest_index needs a non-empty table");

    // Linear scan - the tables are tiny
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;

    for (i, &entry) in table.iter().enumerate() {
        let dist = color.distance_squared(entry);
        if dist < best_dist {
            best_dist = dist;
            best_idx = i;
        }
    }

    best_idx
}

/// A color palette with index-aligned nominal and measured tables.
///
/// E-paper pigments never look like their datasheet values: "red" on an ACeP
/// panel is closer to a dark brick. `Palette` keeps both views of each color:
///
/// - **Nominal colors** (8-bit): what gets written into output images.
/// - **Measured colors** (normalized to `0.0..=1.0`): what the panel really
///   shows, used for every distance and error computation.
///
/// Index `i` refers to the same logical color in both tables.
///
/// # Example
///
/// ```
/// use acep_dither::{Palette, PaletteColor};
///
/// let palette = Palette::acep7();
/// assert_eq!(palette.len(), 7);
/// assert_eq!(palette.nominal(PaletteColor::Red.index()), [255, 0, 0]);
/// assert_eq!(palette.measured(PaletteColor::Red.index()).to_bytes(), [180, 0, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    nominal: Vec<[u8; 3]>,
    measured: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from nominal 8-bit colors and optional measured colors.
    ///
    /// When `measured` is `None` the nominal colors double as the measured
    /// table. Measured bytes are normalized by dividing by 255.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `nominal` is empty
    /// - [`PaletteError::TooFewColors`] if it has a single entry
    /// - [`PaletteError::TooManyColors`] if it has more than 256 entries
    /// - [`PaletteError::LengthMismatch`] if the tables differ in length
    pub fn new(nominal: &[[u8; 3]], measured: Option<&[[u8; 3]]>) -> Result<Self, PaletteError> {
        match nominal.len() {
            0 => return Err(PaletteError::EmptyPalette),
            1 => return Err(PaletteError::TooFewColors { len: 1 }),
            len if len > 256 => return Err(PaletteError::TooManyColors { len }),
            _ => {}
        }

        let measured = match measured {
            Some(m) if m.len() != nominal.len() => {
                return Err(PaletteError::LengthMismatch {
                    nominal: nominal.len(),
                    measured: m.len(),
                });
            }
            Some(m) => m,
            None => nominal,
        };

        Ok(Self {
            nominal: nominal.to_vec(),
            measured: measured.iter().map(|&bytes| Rgb::from_bytes(bytes)).collect(),
        })
    }

    /// The default 7-color ACeP palette: Black, White, Green, Blue, Red,
    /// Yellow, Orange.
    pub fn acep7() -> Self {
        Self {
            nominal: ACEP_NOMINAL.to_vec(),
            measured: ACEP_MEASURED.iter().map(|&bytes| Rgb::from_bytes(bytes)).collect(),
        }
    }

    /// Create a palette from hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or the other [`PaletteError`] variants from [`Palette::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use acep_dither::Palette;
    ///
    /// let palette = Palette::from_hex(
    ///     &["#000000", "#FFFFFF", "#FF0000"],
    ///     Some(&["#000", "#FFF", "#B40000"]),
    /// ).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert_eq!(palette.measured(2).to_bytes(), [180, 0, 0]);
    /// ```
    pub fn from_hex(nominal: &[&str], measured: Option<&[&str]>) -> Result<Self, PaletteError> {
        let nominal_bytes = parse_hex_table(nominal)?;
        let measured_bytes = measured.map(parse_hex_table).transpose()?;
        Palette::new(&nominal_bytes, measured_bytes.as_deref())
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.nominal.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nominal.is_empty()
    }

    /// Nominal 8-bit color at the given index.
    #[inline]
    pub fn nominal(&self, idx: usize) -> [u8; 3] {
        self.nominal[idx]
    }

    /// Measured color at the given index, normalized to `0.0..=1.0`.
    #[inline]
    pub fn measured(&self, idx: usize) -> Rgb {
        self.measured[idx]
    }

    /// The whole nominal table.
    #[inline]
    pub fn nominal_table(&self) -> &[[u8; 3]] {
        &self.nominal
    }

    /// The whole measured table; this is the distance table for dithering.
    #[inline]
    pub fn measured_table(&self) -> &[Rgb] {
        &self.measured
    }

    /// Index of the measured color nearest to `color`.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> usize {
        nearest_index(color, &self.measured)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::acep7()
    }
}

fn parse_hex_table(colors: &[&str]) -> Result<Vec<[u8; 3]>, PaletteError> {
    colors
        .iter()
        .map(|s| Ok(Rgb::from_str(s)?.to_bytes()))
        .collect()
}
