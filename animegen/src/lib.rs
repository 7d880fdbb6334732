//! AnimeGen studio
//!
//! Command-line front end for `image-stylize`: loads an uploaded photo,
//! stylizes it and exports the result as a JPEG, optionally together with
//! an HTML download link carrying the image inline.

pub mod cli;
pub mod config;
pub mod export;
pub mod upload;

use anyhow::{Context, Result};
use image_stylize::{Session, StyleRequest};
use std::time::Instant;

/// Sets up a logger format with timestamp, log level, file name, line number
/// and message. `RUST_LOG` overrides the default `info` filter.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

pub fn run(cli: cli::Cli) -> Result<()> {
    let config = config::Config::load(cli.config.as_deref())?;
    let settings = cli.settings(&config)?;
    log::debug!("{settings:?}");

    let original = upload::load(&cli.input)?;
    log::info!(
        "Loaded {} ({}x{})",
        cli.input.display(),
        original.width(),
        original.height()
    );

    let request = StyleRequest::new(settings.style, settings.strength)?;
    let mut session = Session::new(original);

    let start = Instant::now();
    let processed = session
        .run(&request)
        .with_context(|| format!("stylize {} failed", cli.input.display()))?;
    log::info!(
        "{} @ {} spent: {:?}",
        request.style(),
        request.strength(),
        start.elapsed()
    );

    let stem = export::output_stem(&cli.input, request.style());
    std::fs::create_dir_all(&settings.output_dir)
        .with_context(|| settings.output_dir.display().to_string())?;

    let jpeg_path = settings.output_dir.join(format!("{stem}.jpg"));
    export::save_jpeg(processed, &jpeg_path, settings.jpeg_quality)?;
    log::info!("Saved {}", jpeg_path.display());

    if settings.write_html {
        let html_path = settings.output_dir.join(format!("{stem}.html"));
        let href = export::download_href(processed, &format!("{stem}.png"));
        std::fs::write(&html_path, href).with_context(|| html_path.display().to_string())?;
        log::info!("Saved {}", html_path.display());
    }

    Ok(())
}
