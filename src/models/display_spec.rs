use crate::error::ConvertError;

/// Target raster size for a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySpec {
    pub width: u32,
    pub height: u32,
}

impl DisplaySpec {
    /// 7.3" ACeP panel: 800x480
    pub const ACEP_7IN3: Self = Self {
        width: 800,
        height: 480,
    };

    /// Largest edge accepted for either dimension
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Validate a requested output size
    pub fn new(width: u32, height: u32) -> Result<Self, ConvertError> {
        let valid = 1..=Self::MAX_DIMENSION;
        if valid.contains(&width) && valid.contains(&height) {
            Ok(Self { width, height })
        } else {
            Err(ConvertError::UnsupportedDimensions { width, height })
        }
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for DisplaySpec {
    fn default() -> Self {
        Self::ACEP_7IN3
    }
}
