use anyhow::{Context, Result, bail};
use image::DynamicImage;
use std::{fs, path::Path};

pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Read and decode an uploaded photo.
pub fn load(path: &Path) -> Result<DynamicImage> {
    if !is_accepted(path) {
        bail!(
            "{} is not a supported upload, expected one of {:?}",
            path.display(),
            ACCEPTED_EXTENSIONS
        );
    }

    let bytes = fs::read(path).with_context(|| format!("read {} failed", path.display()))?;
    Ok(image_stylize::decode(&bytes).with_context(|| format!("decode {} failed", path.display()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_is_accepted() {
        assert!(is_accepted(Path::new("a.jpg")));
        assert!(is_accepted(Path::new("a.JPEG")));
        assert!(is_accepted(Path::new("dir/a.png")));
        assert!(!is_accepted(Path::new("a.gif")));
        assert!(!is_accepted(Path::new("noext")));
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        RgbImage::from_pixel(6, 3, Rgb([1, 2, 3])).save(&path).unwrap();

        let img = load(&path).unwrap();
        assert_eq!((img.width(), img.height()), (6, 3));
    }

    #[test]
    fn test_load_rejects_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.gif");
        fs::write(&path, b"GIF89a").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        fs::write(&path, b"not an image").unwrap();
        assert!(load(&path).is_err());
    }
}
