use anyhow::{Context, Result};
use image::{RgbImage, codecs::jpeg::JpegEncoder};
use image_stylize::Style;
use photon_rs::PhotonImage;
use std::{fs::File, io::BufWriter, path::Path};

/// `<input stem>_<style slug>`, used for every exported file.
pub fn output_stem(input: &Path, style: Style) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    format!("{}_{}", stem, style.slug())
}

pub fn save_jpeg(image: &RgbImage, path: &Path, quality: u8) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {} failed", path.display()))?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(image)
        .with_context(|| format!("encode {} failed", path.display()))?;

    Ok(())
}

/// Image as a `data:image/png;base64,...` URI.
pub fn data_uri(image: &RgbImage) -> String {
    let rgba: Vec<u8> = image
        .pixels()
        .flat_map(|p| [p[0], p[1], p[2], 255])
        .collect();
    PhotonImage::new(rgba, image.width(), image.height()).get_base64()
}

/// HTML anchor that downloads the image under `filename`.
pub fn download_href(image: &RgbImage, filename: &str) -> String {
    format!(
        "<a href=\"{}\" download=\"{}\" class=\"dwn-btn\">Download HD Image</a>\n",
        data_uri(image),
        filename
    )
}
