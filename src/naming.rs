//! Output filenames. Downstream renderers find an asset purely from these names,
//! so the format is a contract:
//!
//! * strip: `<family>_<style>_<pt>[_<tier>]_<palette>.png`
//! * digit: `digit_<d>_<family>_<style>_<pt>[_<tier>]_<palette>.png`
//! * resize derivative: `<prefix>_<scale>_<w>x<h>.png`
//!
//! Empty segments (an empty style tag, the base tier) are left out entirely.

use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;

use crate::{
    error::{BakeError, Result},
    palette::PaletteVariant,
    text::FontSpec,
    tier::ResolutionTier,
};

#[derive(Clone, Debug)]
pub struct OutputNamingScheme {
    out_dir: PathBuf,
}

impl OutputNamingScheme {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Creates the output directory if it doesn't exist yet.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .map_err(|err| BakeError::output_write(&self.out_dir, err))
    }

    pub fn strip(
        &self,
        font: &FontSpec,
        tier: &ResolutionTier,
        palette: &PaletteVariant,
    ) -> PathBuf {
        let mut segments = font_segments(font, tier);
        segments.push(palette.tag.to_string());
        self.file(segments)
    }

    pub fn digit(
        &self,
        digit: u8,
        font: &FontSpec,
        tier: &ResolutionTier,
        palette: &PaletteVariant,
    ) -> PathBuf {
        let mut segments = vec!["digit".to_string(), digit.to_string()];
        segments.extend(font_segments(font, tier));
        segments.push(palette.tag.to_string());
        self.file(segments)
    }

    pub fn derivative(&self, prefix: &str, scale_name: &str, width: u32, height: u32) -> PathBuf {
        self.file(vec![
            prefix.to_string(),
            scale_name.to_string(),
            format!("{width}x{height}"),
        ])
    }

    fn file(&self, segments: Vec<String>) -> PathBuf {
        let stem = segments
            .iter()
            .map(|segment| segment.trim())
            .filter(|segment| !segment.is_empty())
            .join("_");
        self.out_dir.join(format!("{stem}.png"))
    }
}

fn font_segments(font: &FontSpec, tier: &ResolutionTier) -> Vec<String> {
    vec![
        font.family.to_lowercase(),
        font.style.to_lowercase(),
        tier.point_size.to_string(),
        tier.tag.unwrap_or_default().to_string(),
    ]
}
