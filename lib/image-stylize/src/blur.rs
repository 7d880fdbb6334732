use derivative::Derivative;
use derive_setters::Setters;
use image::GrayImage;

/// Median blur configuration (using imageproc)
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct MedianBlurConfig {
    /// Square aperture side, odd
    #[derivative(Default(value = "5"))]
    pub aperture: u32,
}

impl MedianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        let radius = self.aperture / 2;
        imageproc::filter::median_filter(image, radius, radius)
    }
}

/// Gaussian blur with an explicit square kernel
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GaussianBlurConfig {
    /// Kernel side, odd
    #[derivative(Default(value = "21"))]
    pub kernel_size: u32,

    /// Standard deviation; zero or negative derives it from the kernel size
    #[derivative(Default(value = "0.0"))]
    pub sigma: f32,
}

impl GaussianBlurConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effective_sigma(&self) -> f32 {
        if self.sigma > 0.0 {
            self.sigma
        } else {
            0.3 * ((self.kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
        }
    }

    /// Normalised 1-D kernel, applied along both axes.
    pub fn kernel(&self) -> Vec<f32> {
        let size = (self.kernel_size | 1) as i32;
        let half = size / 2;
        let sigma = self.effective_sigma();

        let weights: Vec<f32> = (-half..=half)
            .map(|i| (-((i * i) as f32) / (2.0 * sigma * sigma)).exp())
            .collect();
        let total: f32 = weights.iter().sum();

        weights.into_iter().map(|w| w / total).collect()
    }

    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        imageproc::filter::separable_filter_equal(image, &self.kernel())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_sigma_from_kernel_size() {
        let config = GaussianBlurConfig::new();
        assert!((config.effective_sigma() - 3.5).abs() < 1e-6);

        let config = GaussianBlurConfig::new().with_sigma(2.0);
        assert_eq!(config.effective_sigma(), 2.0);
    }

    #[test]
    fn test_kernel_normalised_and_symmetric() {
        let kernel = GaussianBlurConfig::new().kernel();
        assert_eq!(kernel.len(), 21);
        assert!((kernel.iter().sum::<f32>() - 1.0).abs() < 1e-5);
        assert_eq!(kernel[0], kernel[20]);
        assert!(kernel[10] > kernel[9]);
    }

    #[test]
    fn test_even_kernel_size_rounds_up() {
        let kernel = GaussianBlurConfig::new().with_kernel_size(4).kernel();
        assert_eq!(kernel.len(), 5);
    }

    #[test]
    fn test_gaussian_uniform_stays_close() {
        let img = GrayImage::from_pixel(30, 30, Luma([200]));
        let out = GaussianBlurConfig::new().apply(&img);
        for pixel in out.pixels() {
            assert!(pixel[0].abs_diff(200) <= 1);
        }
    }

    #[test]
    fn test_median_removes_speckle() {
        let mut img = GrayImage::from_pixel(9, 9, Luma([50]));
        img.put_pixel(4, 4, Luma([255]));
        let out = MedianBlurConfig::new().apply(&img);
        assert_eq!(out.get_pixel(4, 4)[0], 50);
    }
}
