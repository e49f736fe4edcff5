//! Output types for the dithering pipeline.
//!
//! [`DitheredImage`] stores the index grid together with its
//! [`Palette`](crate::palette::Palette) and offers:
//!
//! - **Indexed** ([`DitheredImage::indices`]): raw `u8` palette indices
//! - **Nominal RGB** ([`DitheredImage::to_rgb_nominal`]): colors for the panel
//! - **Measured RGB** ([`DitheredImage::to_rgb_measured`]): appearance preview

mod dithered_image;

pub use dithered_image::DitheredImage;
