/// Ink mask demo
/// Saves the intermediate line mask next to the final comic image

use anyhow::Result;
use image_stylize::{Stylize, ink_comic::InkComicConfig, threshold::AdaptiveThresholdConfig};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img = image::open("data/test.png")?.to_rgb8();

    for offset in [3, 9, 15] {
        let config = InkComicConfig::new()
            .with_lines(AdaptiveThresholdConfig::new().with_offset(offset));

        config.line_mask(&img).save(output_dir.join(format!("ink_mask_c{offset}.png")))?;
        config
            .stylize(&img, 0)?
            .save(output_dir.join(format!("ink_comic_c{offset}.png")))?;
        log::info!("Generated offset {offset}");
    }

    Ok(())
}
