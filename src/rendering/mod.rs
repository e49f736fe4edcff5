pub mod converter;
pub mod encode;
pub mod enhance;
pub mod resize;

pub use converter::{ConversionReport, Converter, DEFAULT_SATURATION};
pub use encode::{encode, encode_indexed_png, OutputFormat};
pub use enhance::enhance_saturation;
pub use resize::resize_crop;
