use crate::{Result, StyleRequest, transform};
use image::{DynamicImage, RgbImage};

/// Caller-held studio state: the uploaded image and the latest result.
#[derive(Debug, Clone)]
pub struct Session {
    original: DynamicImage,
    processed: Option<RgbImage>,
}

impl Session {
    pub fn new(original: DynamicImage) -> Self {
        Self {
            original,
            processed: None,
        }
    }

    pub fn original(&self) -> &DynamicImage {
        &self.original
    }

    pub fn processed(&self) -> Option<&RgbImage> {
        self.processed.as_ref()
    }

    /// Stylize the original and replace any previous result.
    ///
    /// On error the previous result is kept.
    pub fn run(&mut self, request: &StyleRequest) -> Result<&RgbImage> {
        let processed = transform(&self.original, request)?;
        Ok(self.processed.insert(processed))
    }

    pub fn take_processed(&mut self) -> Option<RgbImage> {
        self.processed.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Style, testutil};

    #[test]
    fn test_run_fills_processed() {
        let mut session = Session::new(DynamicImage::ImageRgb8(testutil::pattern(12, 10)));
        assert!(session.processed().is_none());

        let request = StyleRequest::new(Style::Sketch, 10).unwrap();
        let dims = session.run(&request).unwrap().dimensions();

        assert_eq!(dims, (12, 10));
        assert!(session.processed().is_some());
        assert_eq!(session.original().to_rgb8().as_raw(), testutil::pattern(12, 10).as_raw());
    }

    #[test]
    fn test_rerun_replaces_result() {
        let mut session = Session::new(DynamicImage::ImageRgb8(testutil::pattern(12, 10)));

        session.run(&StyleRequest::new(Style::Sketch, 0).unwrap()).unwrap();
        let sketch = session.processed().unwrap().clone();
        session.run(&StyleRequest::new(Style::InkComic, 0).unwrap()).unwrap();

        assert_ne!(session.processed().unwrap().as_raw(), sketch.as_raw());
    }

    #[test]
    fn test_take_processed() {
        let mut session = Session::new(DynamicImage::ImageRgb8(testutil::pattern(4, 4)));
        session.run(&StyleRequest::default()).unwrap();

        assert!(session.take_processed().is_some());
        assert!(session.processed().is_none());
    }
}
