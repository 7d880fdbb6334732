use crate::{
    Result, Stylize,
    bilateral::BilateralConfig,
    blur::MedianBlurConfig,
    colour_space::to_gray,
    threshold::{AdaptiveThresholdConfig, mask_and},
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, RgbImage};

/// "Dark Comic" look: ink lines over flat colour cels.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct InkComicConfig {
    #[derivative(Default(value = "MedianBlurConfig::new()"))]
    pub denoise: MedianBlurConfig,

    #[derivative(Default(value = "AdaptiveThresholdConfig::new()"))]
    pub lines: AdaptiveThresholdConfig,

    #[derivative(Default(
        value = "BilateralConfig::new().with_sigma_color(250.0).with_sigma_space(250.0)"
    ))]
    pub flatten: BilateralConfig,
}

impl InkComicConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary line mask: on where the image is locally bright, off on ink lines.
    pub fn line_mask(&self, image: &RgbImage) -> GrayImage {
        let gray = self.denoise.apply(&to_gray(image));
        self.lines.apply(&gray)
    }
}

impl Stylize for InkComicConfig {
    fn stylize(&self, image: &RgbImage, _strength: u8) -> Result<RgbImage> {
        let mask = self.line_mask(image);
        let cels = self.flatten.apply(image);
        Ok(mask_and(&cels, &mask))
    }
}
