use image::RgbaImage;

use crate::{
    atlas::{Strip, StripLayout, DIGIT_COUNT},
    canvas::{blank, draw_glyph},
    error::{BakeError, Result},
    palette::PaletteVariant,
    text::{center_in_cell, Glyph, GlyphSource, Offset},
    tier::ResolutionTier,
};

/// Rasterizes `digit` at the tier's point size and works out where its origin
/// goes inside a single cell.
fn place_digit<S>(
    source: &S,
    tier: &ResolutionTier,
    digit: u8,
    y_correction: i32,
) -> Result<(Glyph, Offset)>
where
    S: GlyphSource + ?Sized,
{
    let character = char::from_digit(u32::from(digit), 10)
        .ok_or_else(|| BakeError::InvalidConfig(format!("{digit} is not a single digit")))?;
    let glyph = source.rasterize(character, tier.point_size)?;
    let offset = center_in_cell(&glyph.bbox, tier.cell, y_correction);
    Ok((glyph, offset))
}

/// Lays the ten digits out left to right, each centered in its own cell.
pub struct SheetComposer<'a, S: ?Sized> {
    source: &'a S,
    tier: &'a ResolutionTier,
    y_correction: i32,
}

impl<'a, S: GlyphSource + ?Sized> SheetComposer<'a, S> {
    pub fn new(source: &'a S, tier: &'a ResolutionTier) -> Self {
        Self {
            source,
            tier,
            y_correction: 0,
        }
    }

    pub fn with_y_correction(mut self, y_correction: i32) -> Self {
        self.y_correction = y_correction;
        self
    }

    pub fn compose(&self, palette: &PaletteVariant) -> Result<Strip> {
        let layout = StripLayout::digits(self.tier.cell);
        let mut canvas = blank(layout.width(), layout.height(), palette.background);

        for digit in 0..DIGIT_COUNT as u8 {
            let (glyph, offset) = place_digit(self.source, self.tier, digit, self.y_correction)?;
            let cell_x = layout
                .get_rect(u32::from(digit))
                .map_or(0, |rect| rect.x as i32);
            let origin = Offset {
                dx: cell_x,
                dy: 0,
            } + offset;
            draw_glyph(&mut canvas, &glyph, origin, palette.foreground);
        }

        Ok(Strip::new(layout, canvas))
    }
}

/// Renders each digit into its own cell-sized image.
pub struct GlyphSetEmitter<'a, S: ?Sized> {
    source: &'a S,
    tier: &'a ResolutionTier,
    y_correction: i32,
}

impl<'a, S: GlyphSource + ?Sized> GlyphSetEmitter<'a, S> {
    pub fn new(source: &'a S, tier: &'a ResolutionTier) -> Self {
        Self {
            source,
            tier,
            y_correction: 0,
        }
    }

    pub fn with_y_correction(mut self, y_correction: i32) -> Self {
        self.y_correction = y_correction;
        self
    }

    pub fn render(&self, digit: u8, palette: &PaletteVariant) -> Result<RgbaImage> {
        let (glyph, offset) = place_digit(self.source, self.tier, digit, self.y_correction)?;
        let cell = self.tier.cell;
        let mut canvas = blank(cell.width, cell.height, palette.background);
        draw_glyph(&mut canvas, &glyph, offset, palette.foreground);
        Ok(canvas)
    }
}
