use crate::{
    Result, Stylize,
    blur::GaussianBlurConfig,
    colour_space::{gray_to_rgb, to_gray},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma, RgbImage};

/// Pencil sketch: colour dodge of the grayscale image with its blurred negative.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SketchConfig {
    #[derivative(Default(value = "GaussianBlurConfig::new()"))]
    pub blur: GaussianBlurConfig,
}

impl SketchConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stylize for SketchConfig {
    fn stylize(&self, image: &RgbImage, _strength: u8) -> Result<RgbImage> {
        let gray = to_gray(image);

        let mut inverted = gray.clone();
        for pixel in inverted.pixels_mut() {
            pixel[0] = 255 - pixel[0];
        }

        let blurred = self.blur.apply(&inverted);

        let sketch = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
            Luma([dodge(gray.get_pixel(x, y)[0], blurred.get_pixel(x, y)[0])])
        });

        Ok(gray_to_rgb(&sketch))
    }
}

/// base * 256 / (256 - blend), rounded and clamped
pub fn dodge(base: u8, blend: u8) -> u8 {
    let denom = 256 - blend as u32;
    ((base as u32 * 256 + denom / 2) / denom).min(255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;
    use image::Rgb;

    #[test]
    fn test_dodge() {
        assert_eq!(dodge(255, 0), 255);
        assert_eq!(dodge(0, 255), 0);
        assert_eq!(dodge(100, 0), 100);
        assert_eq!(dodge(100, 128), 200);
        assert_eq!(dodge(200, 128), 255);
    }

    #[test]
    fn test_channels_identical() {
        let out = SketchConfig::new().stylize(&testutil::pattern(30, 30), 50).unwrap();
        assert!(out.pixels().all(|p| p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn test_flat_image_turns_light() {
        let img = RgbImage::from_pixel(25, 25, Rgb([100, 100, 100]));
        let out = SketchConfig::new().stylize(&img, 50).unwrap();
        // 100 * 256 / (256 - 155) is roughly 253
        assert!(out.pixels().all(|p| p[0] >= 250));
    }

    #[test]
    fn test_strength_is_ignored() {
        let img = testutil::pattern(20, 20);
        let config = SketchConfig::new();
        let a = config.stylize(&img, 0).unwrap();
        let b = config.stylize(&img, 100).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }
}
