use crate::{
    Result, Stylize,
    bilateral::BilateralConfig,
    colour_space::{hsv_to_rgb, rgb_to_hsv},
    detail::DetailEnhanceConfig,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// "Ghibli Art" look: flattened texture, crisp detail, boosted colour.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct PainterlyConfig {
    #[derivative(Default(value = "BilateralConfig::new()"))]
    pub smoothing: BilateralConfig,

    #[derivative(Default(value = "2"))]
    pub smoothing_passes: u32,

    #[derivative(Default(value = "DetailEnhanceConfig::new()"))]
    pub detail: DetailEnhanceConfig,
}

impl PainterlyConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stylize for PainterlyConfig {
    fn stylize(&self, image: &RgbImage, strength: u8) -> Result<RgbImage> {
        let mut result = image.clone();
        for _ in 0..self.smoothing_passes {
            result = self.smoothing.apply(&result);
        }

        let mut result = self.detail.apply(&result);
        boost_saturation(&mut result, saturation_factor(strength));
        Ok(result)
    }
}

/// strength 0 leaves saturation alone, 100 doubles it
pub fn saturation_factor(strength: u8) -> f32 {
    1.0 + strength as f32 / 100.0
}

pub fn scale_saturation(saturation: u8, factor: f32) -> u8 {
    (saturation as f32 * factor).clamp(0.0, 255.0) as u8
}

pub fn boost_saturation(image: &mut RgbImage, factor: f32) {
    for pixel in image.pixels_mut() {
        let [h, s, v] = rgb_to_hsv(pixel.0);
        pixel.0 = hsv_to_rgb([h, scale_saturation(s, factor), v]);
    }
}
