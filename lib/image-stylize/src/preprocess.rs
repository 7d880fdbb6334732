//! Bounded downscale applied before every pipeline.

use crate::{Error, Result};
use fast_image_resize::{
    FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image as FrImage,
};
use image::RgbImage;

/// Longest side, in pixels, an image may keep before being downscaled.
pub const MAX_SIDE: u32 = 1200;

/// Dimensions after fitting the longest side into `max_side`.
///
/// The longest side becomes exactly `max_side`, the other side is rounded
/// and never drops below one pixel.
pub fn fit_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max_side {
        return (width, height);
    }

    let scale = |side: u32| -> u32 {
        if side == longest {
            max_side
        } else {
            ((side as f64 * max_side as f64 / longest as f64).round() as u32).max(1)
        }
    };

    (scale(width), scale(height))
}

pub fn downscale_to_fit(image: RgbImage, max_side: u32) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    let (target_width, target_height) = fit_dimensions(width, height, max_side);

    if (target_width, target_height) == (width, height) {
        return Ok(image);
    }

    log::debug!("downscale {width}x{height} -> {target_width}x{target_height}");

    let src_image = FrImage::from_vec_u8(width, height, image.into_raw(), PixelType::U8x3)?;
    let mut dst_image = FrImage::new(target_width, target_height, PixelType::U8x3);
    let options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::CatmullRom));
    Resizer::new().resize(&src_image, &mut dst_image, &options)?;

    RgbImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::InvalidInput("Failed to create resized image".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[test]
    fn test_fit_dimensions_small_untouched() {
        assert_eq!(fit_dimensions(800, 600, MAX_SIDE), (800, 600));
        assert_eq!(fit_dimensions(1200, 1200, MAX_SIDE), (1200, 1200));
        assert_eq!(fit_dimensions(1, 1, MAX_SIDE), (1, 1));
    }

    #[test]
    fn test_fit_dimensions_landscape_and_portrait() {
        assert_eq!(fit_dimensions(2000, 1000, MAX_SIDE), (1200, 600));
        assert_eq!(fit_dimensions(1000, 3000, MAX_SIDE), (400, 1200));
        assert_eq!(fit_dimensions(1201, 1201, MAX_SIDE), (1200, 1200));
    }

    #[test]
    fn test_fit_dimensions_thin_strip() {
        assert_eq!(fit_dimensions(5000, 1, MAX_SIDE), (1200, 1));
    }

    #[test]
    fn test_downscale_to_fit() {
        let image = testutil::pattern(300, 150);
        let out = downscale_to_fit(image, 100).unwrap();
        assert_eq!(out.dimensions(), (100, 50));
    }

    #[test]
    fn test_downscale_passthrough() {
        let image = testutil::pattern(30, 15);
        let raw = image.as_raw().clone();
        let out = downscale_to_fit(image, 100).unwrap();
        assert_eq!(out.as_raw(), &raw);
    }
}
