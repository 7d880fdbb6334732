//! Detail enhancement.
//!
//! The lightness channel is split into a smooth base layer, computed with a
//! recursive edge-aware domain-transform filter, and a detail layer. The
//! detail layer is amplified and added back.

use crate::colour_space::{lab_to_rgb, rgb_to_lab};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct DetailEnhanceConfig {
    /// Spatial extent of the base-layer filter
    #[derivative(Default(value = "10.0"))]
    pub sigma_s: f32,

    /// Range extent of the base-layer filter, in normalised intensity
    #[derivative(Default(value = "0.15"))]
    pub sigma_r: f32,

    #[derivative(Default(value = "3.0"))]
    pub factor: f32,

    #[derivative(Default(value = "3"))]
    pub iterations: u32,
}

impl DetailEnhanceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let (width, height) = (image.width() as usize, image.height() as usize);

        let lab: Vec<[f32; 3]> = image
            .pixels()
            .map(|p| rgb_to_lab(p.0.map(|c| c as f32 / 255.0)))
            .collect();

        let lightness: Vec<f32> = lab.iter().map(|l| l[0] / 255.0).collect();
        let base = self.base_layer(&lightness, width, height);

        let mut result = RgbImage::new(image.width(), image.height());
        for (i, pixel) in result.pixels_mut().enumerate() {
            let enhanced = base[i] + (lightness[i] - base[i]) * self.factor;
            let l = (enhanced * 255.0).clamp(0.0, 100.0);
            let rgb = lab_to_rgb([l, lab[i][1], lab[i][2]]);
            *pixel = Rgb(rgb.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8));
        }

        result
    }

    /// Edge-aware smoothing of a single plane, rows first then columns.
    pub fn base_layer(&self, plane: &[f32], width: usize, height: usize) -> Vec<f32> {
        let ratio = self.sigma_s / self.sigma_r.max(f32::EPSILON);

        // Domain-transform derivatives; index 0 of each run is unused.
        let mut dx = vec![1.0f32; plane.len()];
        for y in 0..height {
            for x in 1..width {
                let i = y * width + x;
                dx[i] = 1.0 + ratio * (plane[i] - plane[i - 1]).abs();
            }
        }

        let mut dy = vec![1.0f32; plane.len()];
        for y in 1..height {
            for x in 0..width {
                let i = y * width + x;
                dy[i] = 1.0 + ratio * (plane[i] - plane[i - width]).abs();
            }
        }

        let iterations = self.iterations.max(1) as i32;
        let norm = (4f32.powi(iterations) - 1.0).sqrt();
        let mut out = plane.to_vec();

        for i in 0..iterations {
            let sigma_h =
                self.sigma_s * 3f32.sqrt() * 2f32.powi(iterations - (i + 1)) / norm;
            let a = (-(2f32.sqrt()) / sigma_h).exp();

            for y in 0..height {
                recursive_pass(&mut out, &dx, y * width, 1, width, a);
            }
            for x in 0..width {
                recursive_pass(&mut out, &dy, x, width, height, a);
            }
        }

        out
    }
}

// Causal then anti-causal first-order filter along one line of `len` samples
// starting at `start` with the given stride.
fn recursive_pass(
    data: &mut [f32],
    deriv: &[f32],
    start: usize,
    stride: usize,
    len: usize,
    a: f32,
) {
    if len < 2 {
        return;
    }

    for k in 1..len {
        let i = start + k * stride;
        let v = a.powf(deriv[i]);
        data[i] += v * (data[i - stride] - data[i]);
    }

    for k in (0..len - 1).rev() {
        let i = start + k * stride;
        let v = a.powf(deriv[i + stride]);
        data[i] += v * (data[i + stride] - data[i]);
    }
}
