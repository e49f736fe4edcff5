use image::RgbImage;

/// ITU-R 601-2 luma in 16.16 fixed point.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Push colors away from (factor > 1) or toward (factor < 1) their gray level.
///
/// Each channel becomes `gray + factor * (channel - gray)`, truncated toward
/// zero and clipped to `0..=255`. A factor of 1.0 is the identity and 0.0
/// yields grayscale.
pub fn enhance_saturation(img: &mut RgbImage, factor: f32) {
    for pixel in img.pixels_mut() {
        let [r, g, b] = pixel.0;
        let gray = luma(r, g, b) as f32;
        pixel.0 = [r, g, b].map(|c| {
            let v = gray + factor * (c as f32 - gray);
            (v as i32).clamp(0, 255) as u8
        });
    }
}
