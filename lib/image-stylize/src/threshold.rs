use derivative::Derivative;
use derive_setters::Setters;
use image::{GrayImage, Luma, Rgb, RgbImage};

pub const MASK_ON: u8 = 255;
pub const MASK_OFF: u8 = 0;

/// Binarization against the mean of each pixel's neighbourhood.
///
/// A pixel becomes [`MASK_ON`] when it is brighter than the rounded local
/// mean minus `offset`, otherwise [`MASK_OFF`]. Borders replicate.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct AdaptiveThresholdConfig {
    /// Window side, odd
    #[derivative(Default(value = "9"))]
    pub block_size: u32,

    #[derivative(Default(value = "9"))]
    pub offset: i32,
}

impl AdaptiveThresholdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        let means = local_means(image, (self.block_size / 2) as i32);

        GrayImage::from_fn(image.width(), image.height(), |x, y| {
            let idx = y as usize * image.width() as usize + x as usize;
            let value = image.get_pixel(x, y)[0] as i32;
            if value > means[idx] as i32 - self.offset {
                Luma([MASK_ON])
            } else {
                Luma([MASK_OFF])
            }
        })
    }
}

// Box means with clamped borders, rounded to the nearest integer.
fn local_means(image: &GrayImage, radius: i32) -> Vec<u8> {
    let (width, height) = (image.width() as i32, image.height() as i32);
    let src = image.as_raw();
    let side = (2 * radius + 1) as u32;

    let mut rows = vec![0u32; src.len()];
    for y in 0..height {
        let row = (y * width) as usize;
        for x in 0..width {
            rows[row + x as usize] = (-radius..=radius)
                .map(|dx| src[row + (x + dx).clamp(0, width - 1) as usize] as u32)
                .sum();
        }
    }

    let area = side * side;
    let mut means = vec![0u8; src.len()];
    for y in 0..height {
        for x in 0..width {
            let sum: u32 = (-radius..=radius)
                .map(|dy| rows[((y + dy).clamp(0, height - 1) * width + x) as usize])
                .sum();
            means[(y * width + x) as usize] = ((sum + area / 2) / area) as u8;
        }
    }

    means
}

/// Keep `color` where `mask` is on, black elsewhere.
pub fn mask_and(color: &RgbImage, mask: &GrayImage) -> RgbImage {
    RgbImage::from_fn(color.width(), color.height(), |x, y| {
        if mask.get_pixel(x, y)[0] == MASK_ON {
            *color.get_pixel(x, y)
        } else {
            Rgb([0, 0, 0])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_image_is_all_on() {
        let img = GrayImage::from_pixel(10, 10, Luma([90]));
        let mask = AdaptiveThresholdConfig::new().apply(&img);
        assert!(mask.pixels().all(|p| p[0] == MASK_ON));
    }

    #[test]
    fn test_dark_line_is_off() {
        let img = GrayImage::from_fn(15, 15, |x, _| {
            if x == 7 { Luma([20]) } else { Luma([200]) }
        });
        let mask = AdaptiveThresholdConfig::new().apply(&img);

        assert_eq!(mask.get_pixel(7, 7)[0], MASK_OFF);
        assert_eq!(mask.get_pixel(2, 7)[0], MASK_ON);
    }

    #[test]
    fn test_mask_is_binary() {
        let img = GrayImage::from_fn(32, 32, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]));
        let mask = AdaptiveThresholdConfig::new().apply(&img);
        assert!(mask.pixels().all(|p| p[0] == MASK_ON || p[0] == MASK_OFF));
    }

    #[test]
    fn test_local_means_replicate_border() {
        let img = GrayImage::from_fn(3, 1, |x, _| Luma([(x * 10) as u8]));
        // window of 3 at x=0 sees [0, 0, 10]
        assert_eq!(local_means(&img, 1), vec![3, 10, 17]);
    }

    #[test]
    fn test_mask_and() {
        let color = RgbImage::from_pixel(2, 1, Rgb([10, 20, 30]));
        let mut mask = GrayImage::new(2, 1);
        mask.put_pixel(0, 0, Luma([MASK_ON]));

        let out = mask_and(&color, &mask);
        assert_eq!(out.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(out.get_pixel(1, 0).0, [0, 0, 0]);
    }
}
