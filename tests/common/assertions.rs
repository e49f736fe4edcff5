//! Assertion helpers for tests.

use std::collections::HashSet;
use std::path::Path;

use image::RgbImage;
use pretty_assertions::assert_eq;

/// Decode an output file as RGB
pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to decode {}: {e}", path.display()))
        .to_rgb8()
}

/// Assert the image has the expected size
pub fn assert_dimensions(img: &RgbImage, width: u32, height: u32) {
    assert_eq!(
        img.dimensions(),
        (width, height),
        "Expected {width}x{height} output"
    );
}

/// Assert every pixel is one of `colors`
pub fn assert_only_colors(img: &RgbImage, colors: &[[u8; 3]]) {
    let allowed: HashSet<[u8; 3]> = colors.iter().copied().collect();
    for (x, y, px) in img.enumerate_pixels() {
        assert!(
            allowed.contains(&px.0),
            "Pixel ({x}, {y}) has color {:?}, not in palette {colors:?}",
            px.0
        );
    }
}

/// Distinct colors present in the image
pub fn distinct_colors(img: &RgbImage) -> HashSet<[u8; 3]> {
    img.pixels().map(|px| px.0).collect()
}

/// Assert the file is a palette-indexed PNG with the given bit depth
pub fn assert_indexed_png(path: &Path, bit_depth: png::BitDepth) {
    let file = std::fs::File::open(path).expect("Failed to open output");
    let reader = png::Decoder::new(std::io::BufReader::new(file))
        .read_info()
        .expect("Output is not a valid PNG");
    let info = reader.info();
    assert_eq!(info.color_type, png::ColorType::Indexed, "Expected indexed PNG");
    assert_eq!(info.bit_depth, bit_depth, "Unexpected bit depth");
}
