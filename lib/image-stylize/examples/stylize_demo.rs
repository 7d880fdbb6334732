/// Stylize demo
/// Renders every style at a few strengths

use anyhow::{Context, Result};
use image_stylize::{Style, StyleRequest};
use std::{fs, path::PathBuf, time::Instant};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let input_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/test.png".to_string());
    let output_dir = PathBuf::from("tmp");
    fs::create_dir_all(&output_dir)?;

    let bytes = fs::read(&input_file).with_context(|| input_file.clone())?;
    let img = image_stylize::decode(&bytes)?;
    log::info!("Image size: {}x{}", img.width(), img.height());

    for style in Style::all() {
        for strength in [0, 50, 100] {
            let request = StyleRequest::new(style, strength)?;

            let start = Instant::now();
            let out = image_stylize::transform(&img, &request)?;
            log::info!("{} @ {} spent: {:?}", style, strength, start.elapsed());

            let output_path = output_dir.join(format!("{}_{}.png", style.slug(), strength));
            out.save(&output_path)
                .with_context(|| output_path.to_string_lossy().to_string())?;
        }
    }

    log::info!("Images saved to: {}", output_dir.display());
    Ok(())
}
