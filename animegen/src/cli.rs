use crate::config::Config;
use anyhow::{Context, Result, bail};
use clap::Parser;
use image_stylize::Style;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Turn a photo into anime, comic or sketch art")]
pub struct Cli {
    /// Image to stylize (jpg, jpeg or png)
    pub input: PathBuf,

    /// Style: "Ghibli Art", "Dark Comic" or "Sketch"
    #[arg(short, long)]
    pub style: Option<String>,

    /// Strength 0-100, used by the Ghibli Art style
    #[arg(short = 'n', long)]
    pub strength: Option<u8>,

    /// Output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JPEG quality 1-100
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Also write an HTML download link
    #[arg(long)]
    pub html: bool,

    /// Config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Config values with command-line overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub style: Style,
    pub strength: u8,
    pub output_dir: PathBuf,
    pub jpeg_quality: u8,
    pub write_html: bool,
}

impl Cli {
    pub fn settings(&self, config: &Config) -> Result<Settings> {
        let style_name = self.style.as_deref().unwrap_or(&config.style);
        let style = style_name
            .parse::<Style>()
            .with_context(|| format!("unknown style `{style_name}`"))?;

        let jpeg_quality = self.quality.unwrap_or(config.jpeg_quality);
        if !(1..=100).contains(&jpeg_quality) {
            bail!("JPEG quality {jpeg_quality} is out of range 1-100");
        }

        Ok(Settings {
            style,
            strength: self.strength.unwrap_or(config.strength),
            output_dir: self.output.clone().unwrap_or_else(|| config.output_dir.clone()),
            jpeg_quality,
            write_html: self.html || config.write_html,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_config() {
        let cli = Cli::parse_from(["animegen", "photo.png"]);
        let settings = cli.settings(&Config::default()).unwrap();

        assert_eq!(settings.style, Style::Painterly);
        assert_eq!(settings.strength, 50);
        assert_eq!(settings.jpeg_quality, 95);
        assert!(!settings.write_html);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "animegen", "photo.png", "--style", "Dark Comic", "-n", "80", "-o", "out", "--html",
        ]);
        let settings = cli.settings(&Config::default()).unwrap();

        assert_eq!(settings.style, Style::InkComic);
        assert_eq!(settings.strength, 80);
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert!(settings.write_html);
    }

    #[test]
    fn test_unknown_style() {
        let cli = Cli::parse_from(["animegen", "photo.png", "--style", "oil"]);
        assert!(cli.settings(&Config::default()).is_err());
    }

    #[test]
    fn test_bad_quality() {
        let cli = Cli::parse_from(["animegen", "photo.png", "--quality", "0"]);
        assert!(cli.settings(&Config::default()).is_err());
    }
}
