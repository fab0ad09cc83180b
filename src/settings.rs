use std::path::PathBuf;

use crate::{
    error::Result,
    naming::OutputNamingScheme,
    resize::{default_scales, ResizeConfig, Resampling, ScaleFactor},
    text::FontSpec,
    tier::ResolutionTier,
};

#[derive(clap::Parser, Debug)]
#[command(
    name = "digibake",
    version,
    about = "Bakes numeral sprite strips and digit images from a vector font",
    long_about = None
)]
pub struct Arguments {
    /// Directory holding `<family>-<style>.ttf`
    #[arg(long, global = true, default_value = "resources/fonts")]
    fonts_dir: PathBuf,

    /// Directory the PNGs are written to
    #[arg(long, global = true, default_value = "resources/images")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Ten-digit strips in both palettes, plus the derived small tier
    Sheets(SheetArgs),
    /// One image per digit in both palettes
    Digits(DigitArgs),
    /// Resampled copies of an already baked strip
    Resize(ResizeArgs),
}

#[derive(clap::Args, Debug)]
struct FontArgs {
    #[arg(long, default_value = "leco")]
    family: String,

    /// Style tag; may be empty
    #[arg(long, default_value = "regular")]
    style: String,

    /// Added to every glyph's vertical offset
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y_correction: i32,

    #[arg(long, default_value_t = 48)]
    cell_width: u32,

    #[arg(long, default_value_t = 68)]
    cell_height: u32,
}

#[derive(clap::Args, Debug)]
struct SheetArgs {
    #[command(flatten)]
    font: FontArgs,

    #[arg(long, default_value_t = 88)]
    point_size: u32,

    /// Skip the half-size tier
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_small: bool,
}

#[derive(clap::Args, Debug)]
struct DigitArgs {
    #[command(flatten)]
    font: FontArgs,

    #[arg(long, default_value_t = 84)]
    point_size: u32,

    /// Also emit the half-size tier
    #[arg(long, action = clap::ArgAction::SetTrue)]
    small: bool,
}

#[derive(clap::Args, Debug)]
struct ResizeArgs {
    /// Baked strip to resample
    #[arg(long, default_value = "resources/images/Numbers_24w_30h.png")]
    source: PathBuf,

    #[arg(long, default_value = "stolen_numbers")]
    prefix: String,

    /// Addressable slots in the source strip
    #[arg(long, default_value_t = 11)]
    elements: u32,

    #[arg(long, value_enum, default_value = "smooth")]
    filter: Resampling,

    /// Comma separated `name=factor` pairs
    #[arg(long, value_delimiter = ',', value_parser = parse_scale)]
    scales: Vec<ScaleFactor>,
}

/// A fully resolved unit of work.
#[derive(Debug)]
pub enum Job {
    Sheets {
        font: FontSpec,
        tier: ResolutionTier,
        with_small: bool,
        y_correction: i32,
    },
    Digits {
        font: FontSpec,
        tier: ResolutionTier,
        with_small: bool,
        y_correction: i32,
    },
    Resize {
        source: PathBuf,
        config: ResizeConfig,
    },
}

/// Holds everything a run needs, resolved from the command line.
#[derive(Debug)]
pub struct Settings {
    pub fonts_dir: PathBuf,
    pub naming: OutputNamingScheme,
    pub job: Job,
}

impl Arguments {
    pub fn into_settings(self) -> Result<Settings> {
        let job = match self.command {
            Command::Sheets(args) => {
                let (font, tier, y_correction) = args.font.resolve(args.point_size)?;
                Job::Sheets {
                    font,
                    tier,
                    with_small: !args.no_small,
                    y_correction,
                }
            }
            Command::Digits(args) => {
                let (font, tier, y_correction) = args.font.resolve(args.point_size)?;
                Job::Digits {
                    font,
                    tier,
                    with_small: args.small,
                    y_correction,
                }
            }
            Command::Resize(args) => {
                let scales = if args.scales.is_empty() {
                    default_scales()
                } else {
                    args.scales
                };
                Job::Resize {
                    source: args.source,
                    config: ResizeConfig {
                        prefix: args.prefix,
                        scales,
                        resampling: args.filter,
                        element_count: args.elements,
                    },
                }
            }
        };

        Ok(Settings {
            fonts_dir: self.fonts_dir,
            naming: OutputNamingScheme::new(self.out_dir),
            job,
        })
    }
}

impl FontArgs {
    fn resolve(self, point_size: u32) -> Result<(FontSpec, ResolutionTier, i32)> {
        let font = FontSpec::new(self.family, self.style)?;
        let tier = ResolutionTier::new(point_size, self.cell_width, self.cell_height)?;
        Ok((font, tier, self.y_correction))
    }
}

fn parse_scale(s: &str) -> std::result::Result<ScaleFactor, String> {
    s.parse().map_err(|e: crate::error::BakeError| format!("{e}"))
}
