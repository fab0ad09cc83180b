use digibake_asset::loader::{Asset, Loader};
use fontdue::{Font, FontSettings};
use log::debug;

use super::glyph::{check_digit, Glyph, GlyphSource};
#[cfg(test)]
use super::glyph::INK_THRESHOLD;
use crate::error::{BakeError, Result};

/// Identifies a font by family name and style tag, e.g. `leco` / `regular`.
/// The style tag may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub family: String,
    pub style: String,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Result<Self> {
        let family = family.into();
        if family.trim().is_empty() {
            return Err(BakeError::InvalidConfig("font family must not be empty".into()));
        }
        Ok(Self {
            family,
            style: style.into(),
        })
    }

    pub fn label(&self) -> String {
        if self.style.is_empty() {
            self.family.clone()
        } else {
            format!("{}-{}", self.family, self.style)
        }
    }
}

/// Rasterizes digits from one parsed font. Built once per tier and dropped when
/// that tier is done.
pub struct FontRasterizer {
    font: Font,
    label: String,
}

impl FontRasterizer {
    pub fn load(loader: &Loader, spec: &FontSpec) -> Result<Self> {
        let asset = loader.get_font_by_family(&spec.family, &spec.style)?;
        Self::from_asset(asset, spec.label())
    }

    pub fn from_asset(asset: Asset, label: String) -> Result<Self> {
        let Asset { path, bytes } = asset;
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| {
            BakeError::CorruptResource {
                path,
                kind: "font",
                reason: reason.to_string(),
            }
        })?;
        Ok(Self { font, label })
    }

    /// Fails when the font has no outline for `character`.
    pub fn check_glyph(&self, character: char) -> Result<()> {
        if self.font.lookup_glyph_index(character) == 0 {
            return Err(BakeError::MissingGlyph {
                font: self.label.clone(),
                character,
            });
        }
        Ok(())
    }
}

impl GlyphSource for FontRasterizer {
    fn rasterize(&self, character: char, point_size: u32) -> Result<Glyph> {
        check_digit(character)?;
        if point_size == 0 {
            return Err(BakeError::InvalidConfig("point size must be positive".into()));
        }
        self.check_glyph(character)?;

        let px = point_size as f32;
        let (metrics, bitmap) = self.font.rasterize(character, px);
        // the origin is the top of the line box, so y runs down from the ascender
        let ascent = self
            .font
            .horizontal_line_metrics(px)
            .map_or(px, |line| line.ascent)
            .round() as i32;
        let glyph_top = metrics.ymin + metrics.height as i32;

        let glyph = Glyph::from_coverage(
            character,
            point_size,
            metrics.xmin,
            ascent - glyph_top,
            metrics.width,
            metrics.height,
            &bitmap,
        );
        debug!(
            "{} '{}' @ {}pt: bbox {:?}",
            self.label, character, point_size, glyph.bbox
        );
        Ok(glyph)
    }
}
