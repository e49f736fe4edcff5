use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbImage};

use crate::error::ConvertError;

/// Size that covers `width` x `height` while keeping the source aspect ratio.
///
/// The scaled edge is truncated, never rounded, so it can come out one pixel
/// short of an exact scale but never below the target. Fails if the scaled
/// edge does not fit in a `u32`.
pub fn cover_size(
    src_width: u32,
    src_height: u32,
    width: u32,
    height: u32,
) -> Result<(u32, u32), ConvertError> {
    let (sw, sh) = (src_width as u64, src_height as u64);
    let (w, h) = (width as u64, height as u64);

    // src_w / src_h > w / h, cross-multiplied
    let size = if sw * h > w * sh {
        u32::try_from(sw * h / sh).map(|scaled| (scaled, height))
    } else {
        u32::try_from(sh * w / sw).map(|scaled| (width, scaled))
    };
    size.map_err(|_| ConvertError::UnsupportedDimensions {
        width: src_width,
        height: src_height,
    })
}

/// Scale `img` to cover the target with Lanczos3, then center-crop to exactly
/// `width` x `height`.
pub fn resize_crop(img: &DynamicImage, width: u32, height: u32) -> Result<RgbImage, ConvertError> {
    let (src_width, src_height) = img.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(ConvertError::UnsupportedDimensions {
            width: src_width,
            height: src_height,
        });
    }

    let rgb = img.to_rgb8();
    let (new_width, new_height) = cover_size(src_width, src_height, width, height)?;
    let resized = if (new_width, new_height) == (src_width, src_height) {
        rgb
    } else {
        imageops::resize(&rgb, new_width, new_height, FilterType::Lanczos3)
    };

    let left = (new_width - width) / 2;
    let top = (new_height - height) / 2;
    tracing::debug!(
        src_width,
        src_height,
        new_width,
        new_height,
        left,
        top,
        "Resized for cover crop"
    );

    Ok(imageops::crop_imm(&resized, left, top, width, height).to_image())
}
