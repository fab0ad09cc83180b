use std::path::PathBuf;

use digibake_asset::loader::Loader;
use log::info;

use crate::{
    atlas::DIGIT_COUNT,
    canvas::save_png,
    compose::{GlyphSetEmitter, SheetComposer},
    error::Result,
    naming::OutputNamingScheme,
    palette::PalettePair,
    text::{FontRasterizer, FontSpec, GlyphSource},
    tier::ResolutionTier,
};

/// Writes strips and per-digit images for a font, in both palettes, at one or
/// more resolution tiers.
pub struct Baker<'a> {
    loader: &'a Loader,
    naming: &'a OutputNamingScheme,
    palettes: PalettePair,
    y_correction: i32,
}

impl<'a> Baker<'a> {
    pub fn new(loader: &'a Loader, naming: &'a OutputNamingScheme) -> Self {
        Self {
            loader,
            naming,
            palettes: PalettePair::default(),
            y_correction: 0,
        }
    }

    pub fn with_palettes(mut self, palettes: PalettePair) -> Self {
        self.palettes = palettes;
        self
    }

    pub fn with_y_correction(mut self, y_correction: i32) -> Self {
        self.y_correction = y_correction;
        self
    }

    /// Strips for `base` and, when `with_small` is set, for its derived tier. Each
    /// tier is rasterized from the outlines again rather than downscaled.
    pub fn bake_sheets(
        &self,
        font: &FontSpec,
        base: ResolutionTier,
        with_small: bool,
    ) -> Result<Vec<PathBuf>> {
        self.naming.prepare()?;
        let mut written = Vec::new();
        for tier in base.with_derived(with_small)? {
            let rasterizer = FontRasterizer::load(self.loader, font)?;
            written.extend(self.sheets_for_tier(&rasterizer, font, &tier)?);
            info!(
                "{}pt: {}x{} ({}px per digit)",
                tier.point_size,
                tier.cell.width * DIGIT_COUNT,
                tier.cell.height,
                tier.cell.width
            );
        }
        Ok(written)
    }

    /// One image per digit for `base` and, optionally, its derived tier.
    pub fn bake_digits(
        &self,
        font: &FontSpec,
        base: ResolutionTier,
        with_small: bool,
    ) -> Result<Vec<PathBuf>> {
        self.naming.prepare()?;
        let mut written = Vec::new();
        for tier in base.with_derived(with_small)? {
            let rasterizer = FontRasterizer::load(self.loader, font)?;
            written.extend(self.digits_for_tier(&rasterizer, font, &tier)?);
            info!(
                "{}pt: {} digits of {}x{}",
                tier.point_size, DIGIT_COUNT, tier.cell.width, tier.cell.height
            );
        }
        Ok(written)
    }

    pub fn sheets_for_tier<S: GlyphSource + ?Sized>(
        &self,
        source: &S,
        font: &FontSpec,
        tier: &ResolutionTier,
    ) -> Result<Vec<PathBuf>> {
        let composer = SheetComposer::new(source, tier).with_y_correction(self.y_correction);
        let mut written = Vec::new();
        self.palettes.for_each(|palette| {
            let strip = composer.compose(palette)?;
            let path = self.naming.strip(font, tier, palette);
            save_png(strip.image(), &path)?;
            info!("wrote {}", path.display());
            written.push(path);
            Ok(())
        })?;
        Ok(written)
    }

    pub fn digits_for_tier<S: GlyphSource + ?Sized>(
        &self,
        source: &S,
        font: &FontSpec,
        tier: &ResolutionTier,
    ) -> Result<Vec<PathBuf>> {
        let emitter = GlyphSetEmitter::new(source, tier).with_y_correction(self.y_correction);
        let mut written = Vec::new();
        self.palettes.for_each(|palette| {
            for digit in 0..DIGIT_COUNT as u8 {
                let image = emitter.render(digit, palette)?;
                let path = self.naming.digit(digit, font, tier, palette);
                save_png(&image, &path)?;
                info!("wrote {}", path.display());
                written.push(path);
            }
            Ok(())
        })?;
        Ok(written)
    }
}
