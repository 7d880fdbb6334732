use anyhow::{Context, Result};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::{fs, io::ErrorKind, path::{Path, PathBuf}};

pub const DEFAULT_CONFIG_FILE: &str = "animegen.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Config {
    #[derivative(Default(value = "\"Ghibli Art\".to_string()"))]
    pub style: String,

    #[derivative(Default(value = "50"))]
    pub strength: u8,

    #[derivative(Default(value = "PathBuf::from(\"output\")"))]
    pub output_dir: PathBuf,

    #[derivative(Default(value = "95"))]
    pub jpeg_quality: u8,

    pub write_html: bool,
}

impl Config {
    /// Loads `path`, or `animegen.toml` in the working directory.
    ///
    /// A missing file yields the defaults, a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

        match fs::read_to_string(path) {
            Ok(text) => {
                Self::parse(&text).with_context(|| format!("parse {} failed", path.display()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("read {} failed", path.display())),
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial() {
        let config = Config::parse("style = \"Sketch\"\njpeg_quality = 80\n").unwrap();
        assert_eq!(config.style, "Sketch");
        assert_eq!(config.jpeg_quality, 80);
        assert_eq!(config.strength, 50);
        assert_eq!(config.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(Config::parse("strength = \"lots\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animegen.toml");
        fs::write(&path, "write_html = true\nstrength = 10\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.write_html);
        assert_eq!(config.strength, 10);
    }

    #[test]
    fn test_round_trip_defaults() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), Config::default());
    }
}
