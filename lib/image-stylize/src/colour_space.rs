//! Colour conversions used by the pipelines.
//!
//! HSV follows the 8-bit convention common to image libraries: hue is stored
//! halved in `0..180`, saturation and value span `0..=255`.

use image::{GrayImage, Luma, Rgb, RgbImage};

const D65_WHITE: [f32; 3] = [0.950456, 1.0, 1.088754];
const LAB_EPSILON: f32 = 0.008856;
const LAB_KAPPA: f32 = 903.3;

/// Luminance: 0.299*R + 0.587*G + 0.114*B, rounded
pub fn luma(pixel: &Rgb<u8>) -> u8 {
    (0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32)
        .round()
        .clamp(0.0, 255.0) as u8
}

pub fn to_gray(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma(image.get_pixel(x, y))])
    })
}

/// Replicate a single channel into three identical colour channels.
pub fn gray_to_rgb(image: &GrayImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let v = image.get_pixel(x, y)[0];
        Rgb([v, v, v])
    })
}

pub fn rgb_to_hsv(pixel: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = pixel.map(|c| c as f32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta * 255.0 / max };

    let mut hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / delta
    } else if max == g {
        120.0 + 60.0 * (b - r) / delta
    } else {
        240.0 + 60.0 * (r - g) / delta
    };

    if hue < 0.0 {
        hue += 360.0;
    }

    // 360 degrees map to 180, which wraps back to red
    let hue = ((hue / 2.0).round() as u32 % 180) as u8;

    [hue, saturation.round().clamp(0.0, 255.0) as u8, max as u8]
}

pub fn hsv_to_rgb(pixel: [u8; 3]) -> [u8; 3] {
    let hue = (pixel[0] as f32 * 2.0) % 360.0;
    let saturation = pixel[1] as f32 / 255.0;
    let value = pixel[2] as f32 / 255.0;

    let c = value * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r, g, b].map(|v| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8)
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f32) -> f32 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

fn lab_f_inv(t: f32) -> f32 {
    let cube = t * t * t;
    if cube > LAB_EPSILON {
        cube
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// sRGB in `0..=1` to CIE Lab (D65), L in `0..=100`.
pub fn rgb_to_lab(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb.map(srgb_to_linear);

    let x = (0.412453 * r + 0.357580 * g + 0.180423 * b) / D65_WHITE[0];
    let y = (0.212671 * r + 0.715160 * g + 0.072169 * b) / D65_WHITE[1];
    let z = (0.019334 * r + 0.119193 * g + 0.950227 * b) / D65_WHITE[2];

    let lightness = if y > LAB_EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        LAB_KAPPA * y
    };

    let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));
    [lightness, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// CIE Lab (D65) back to sRGB in `0..=1`, clamped.
pub fn lab_to_rgb(lab: [f32; 3]) -> [f32; 3] {
    let [lightness, a, b] = lab;

    let y = if lightness > LAB_KAPPA * LAB_EPSILON {
        ((lightness + 16.0) / 116.0).powi(3)
    } else {
        lightness / LAB_KAPPA
    };
    let fy = lab_f(y);
    let x = lab_f_inv(fy + a / 500.0) * D65_WHITE[0];
    let z = lab_f_inv(fy - b / 200.0) * D65_WHITE[2];

    let r = 3.240479 * x - 1.537150 * y - 0.498535 * z;
    let g = -0.969256 * x + 1.875992 * y + 0.041556 * z;
    let bl = 0.055648 * x - 0.204043 * y + 1.057311 * z;

    [r, g, bl].map(|c| linear_to_srgb(c.clamp(0.0, 1.0)).clamp(0.0, 1.0))
}
