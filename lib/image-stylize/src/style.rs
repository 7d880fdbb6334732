use crate::{
    Error, Result, Stylize, ink_comic::InkComicConfig, painterly::PainterlyConfig,
    sketch::SketchConfig,
};
use derivative::Derivative;
use image::RgbImage;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::{fmt, str::FromStr};

pub const MAX_STRENGTH: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Style {
    /// "Ghibli Art": bilateral smoothing, detail enhancement, saturation boost
    Painterly = 0,
    /// "Dark Comic": ink lines over flattened colour cels
    InkComic,
    /// "Sketch": pencil dodge of the grayscale image
    Sketch,
}

impl Style {
    pub fn all() -> Vec<Style> {
        vec![Style::Painterly, Style::InkComic, Style::Sketch]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Style::Painterly => "Ghibli Art",
            Style::InkComic => "Dark Comic",
            Style::Sketch => "Sketch",
        }
    }

    /// Short identifier, safe for file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Style::Painterly => "painterly",
            Style::InkComic => "ink-comic",
            Style::Sketch => "sketch",
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Style::try_from(code).map_err(|_| Error::UnsupportedStyle(format!("code {code}")))
    }

    pub fn apply(&self, image: &RgbImage, strength: u8) -> Result<RgbImage> {
        match self {
            Style::Painterly => PainterlyConfig::new().stylize(image, strength),
            Style::InkComic => InkComicConfig::new().stylize(image, strength),
            Style::Sketch => SketchConfig::new().stylize(image, strength),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace(['_', ' '], "-");

        match key.as_str() {
            "painterly" | "ghibli" | "ghibli-art" => Ok(Style::Painterly),
            "ink-comic" | "inkcomic" | "comic" | "dark-comic" => Ok(Style::InkComic),
            "sketch" | "pencil" => Ok(Style::Sketch),
            _ => Err(Error::UnsupportedStyle(s.to_string())),
        }
    }
}

/// One stylization request. Strength only affects [`Style::Painterly`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Derivative)]
#[derivative(Default)]
pub struct StyleRequest {
    #[derivative(Default(value = "Style::Painterly"))]
    style: Style,

    #[derivative(Default(value = "50"))]
    strength: u8,
}

impl StyleRequest {
    pub fn new(style: Style, strength: u8) -> Result<Self> {
        if strength > MAX_STRENGTH {
            return Err(Error::InvalidParameter(format!(
                "strength {strength} is out of range 0..={MAX_STRENGTH}"
            )));
        }

        Ok(Self { style, strength })
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }
}
