use anyhow::{Context, Result};
use clap::Parser;
use digibake::{
    bake::Baker,
    resize::ResizePipeline,
    settings::{Arguments, Job, Settings},
};
use digibake_asset::loader::Loader;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Arguments::parse()
        .into_settings()
        .context("invalid arguments")?;
    run(settings)
}

fn run(settings: Settings) -> Result<()> {
    let Settings {
        fonts_dir,
        naming,
        job,
    } = settings;
    let loader = Loader::new(&fonts_dir);

    let written = match job {
        Job::Sheets {
            font,
            tier,
            with_small,
            y_correction,
        } => Baker::new(&loader, &naming)
            .with_y_correction(y_correction)
            .bake_sheets(&font, tier, with_small)
            .with_context(|| format!("baking {} strips", font.label()))?,
        Job::Digits {
            font,
            tier,
            with_small,
            y_correction,
        } => Baker::new(&loader, &naming)
            .with_y_correction(y_correction)
            .bake_digits(&font, tier, with_small)
            .with_context(|| format!("baking {} digits", font.label()))?,
        Job::Resize { source, config } => ResizePipeline::new(config)?
            .run(&loader, &source, &naming)
            .with_context(|| format!("resizing {}", source.display()))?,
    };

    info!("{} files in {}", written.len(), naming.out_dir().display());
    Ok(())
}
