//! Color types
//!
//! The whole pipeline works on normalized sRGB values: image bytes divided by
//! 255, compared against measured palette entries on the same scale. There is
//! no linear-light or perceptual conversion.

mod rgb;

pub use rgb::Rgb;
