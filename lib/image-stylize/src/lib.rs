pub mod bilateral;
pub mod blur;
pub mod colour_space;
pub mod detail;
pub mod ink_comic;
pub mod painterly;
pub mod preprocess;
pub mod session;
pub mod sketch;
pub mod style;
pub mod threshold;

pub use session::Session;
pub use style::{Style, StyleRequest};

use image::{DynamicImage, RgbImage};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unsupported style: {0}")]
    UnsupportedStyle(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),
    #[error("Image resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),
}

pub trait Stylize {
    fn stylize(&self, image: &RgbImage, strength: u8) -> Result<RgbImage>;
}

/// Decode an uploaded JPEG/PNG byte buffer into a pixel grid.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| Error::InvalidInput(e.to_string()))
}

/// Run the requested pipeline over `image` and return a new RGB image.
///
/// The input is never modified. Images whose longest side exceeds
/// [`preprocess::MAX_SIDE`] are downscaled first.
pub fn transform(image: &DynamicImage, request: &StyleRequest) -> Result<RgbImage> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(Error::InvalidInput(format!(
            "image has zero dimension: {width}x{height}"
        )));
    }

    let rgb = image.to_rgb8();
    let rgb = preprocess::downscale_to_fit(rgb, preprocess::MAX_SIDE)?;

    log::debug!(
        "stylize {}x{} with {} (strength {})",
        rgb.width(),
        rgb.height(),
        request.style().name(),
        request.strength()
    );

    request.style().apply(&rgb, request.strength())
}
