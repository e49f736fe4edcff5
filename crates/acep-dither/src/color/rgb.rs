//! Working-space RGB color type
//!
//! `Rgb` is the continuous color value the dither engine accumulates error
//! into. Channels are `f64` so that diffusion arithmetic matches a
//! double-precision reference bit for bit.

use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color as three real-valued channels.
///
/// Palette tables and pixel buffers agree on a scale by convention: measured
/// palette entries and normalized image pixels live in `0.0..=1.0`. Values are
/// never clamped, since accumulated quantization error can push a pixel
/// outside that range for a while.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel
    pub r: f64,
    /// Green channel
    pub g: f64,
    /// Blue channel
    pub b: f64,
}

impl Rgb {
    /// Black, the zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a color from raw channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels, normalized to `0.0..=1.0`.
    ///
    /// # Example
    /// ```
    /// use acep_dither::Rgb;
    /// let green = Rgb::from_u8(0, 100, 0);
    /// assert_eq!(green.g, 100.0 / 255.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Create a color from a byte array `[R, G, B]`, normalized to `0.0..=1.0`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert a normalized color back to bytes, rounding and clamping to
    /// `0..=255`.
    ///
    /// # Example
    /// ```
    /// use acep_dither::Rgb;
    /// assert_eq!(Rgb::new(1.2, 0.5, -0.1).to_bytes(), [255, 128, 0]);
    /// ```
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Squared Euclidean distance to another color.
    ///
    /// The square root is skipped: only the ordering of distances matters for
    /// nearest-color lookup.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }
}

impl Add for Rgb {
    type Output = Rgb;

    #[inline]
    fn add(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Rgb {
    #[inline]
    fn add_assign(&mut self, rhs: Rgb) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for Rgb {
    type Output = Rgb;

    #[inline]
    fn sub(self, rhs: Rgb) -> Rgb {
        Rgb::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f64> for Rgb {
    type Output = Rgb;

    #[inline]
    fn mul(self, rhs: f64) -> Rgb {
        Rgb::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string, normalized to `0.0..=1.0`.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed.
    ///
    /// ```
    /// use acep_dither::Rgb;
    ///
    /// let orange: Rgb = "#FF8000".parse().unwrap();
    /// assert_eq!(orange.to_bytes(), [255, 128, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: each digit expands to a doubled pair (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
