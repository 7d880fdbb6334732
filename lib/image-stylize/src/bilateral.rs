use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;

/// Edge-preserving smoothing: neighbours are averaged only when they are
/// both spatially close and similar in colour.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct BilateralConfig {
    /// Neighbourhood diameter in pixels
    #[derivative(Default(value = "9"))]
    pub diameter: u32,

    #[derivative(Default(value = "75.0"))]
    pub sigma_color: f32,

    #[derivative(Default(value = "75.0"))]
    pub sigma_space: f32,
}

impl BilateralConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let (width, height) = image.dimensions();
        let radius = (self.diameter / 2).max(1) as i32;
        let sigma_color = self.sigma_color.max(f32::EPSILON);
        let sigma_space = self.sigma_space.max(f32::EPSILON);

        // Circular window: offsets and their spatial weights
        let mut window = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let dist2 = (dx * dx + dy * dy) as f32;
                if dist2.sqrt() > radius as f32 {
                    continue;
                }
                window.push((dx, dy, (-0.5 * dist2 / (sigma_space * sigma_space)).exp()));
            }
        }

        // Colour weights indexed by the L1 distance over three channels
        let color_weight: Vec<f32> = (0..=255 * 3)
            .map(|d| {
                let d = d as f32;
                (-0.5 * d * d / (sigma_color * sigma_color)).exp()
            })
            .collect();

        let src = image.as_raw();
        let stride = width as usize * 3;
        let mut result = RgbImage::new(width, height);

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let center = y as usize * stride + x as usize * 3;
                let (cr, cg, cb) = (src[center], src[center + 1], src[center + 2]);

                let mut sum = [0.0f32; 3];
                let mut weight_sum = 0.0f32;

                for &(dx, dy, space_weight) in &window {
                    let nx = (x + dx).clamp(0, width as i32 - 1) as usize;
                    let ny = (y + dy).clamp(0, height as i32 - 1) as usize;
                    let idx = ny * stride + nx * 3;
                    let (r, g, b) = (src[idx], src[idx + 1], src[idx + 2]);

                    let diff = r.abs_diff(cr) as usize
                        + g.abs_diff(cg) as usize
                        + b.abs_diff(cb) as usize;
                    let w = space_weight * color_weight[diff];

                    sum[0] += r as f32 * w;
                    sum[1] += g as f32 * w;
                    sum[2] += b as f32 * w;
                    weight_sum += w;
                }

                let pixel = result.get_pixel_mut(x as u32, y as u32);
                for c in 0..3 {
                    pixel[c] = (sum[c] / weight_sum).round().clamp(0.0, 255.0) as u8;
                }
            }
        }

        result
    }
}
