use image::Rgba;

use crate::error::Result;

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteVariant {
    /// Filename segment naming the glyph color.
    pub tag: &'static str,
    pub foreground: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl PaletteVariant {
    /// The same two colors with their roles swapped.
    pub fn swapped(&self, tag: &'static str) -> Self {
        Self {
            tag,
            foreground: self.background,
            background: self.foreground,
        }
    }
}

/// Two exactly complementary variants: dark glyphs on light, then light on dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PalettePair {
    dark_on_light: PaletteVariant,
    light_on_dark: PaletteVariant,
}

impl PalettePair {
    pub fn new(dark: Rgba<u8>, light: Rgba<u8>) -> Self {
        let dark_on_light = PaletteVariant {
            tag: "black",
            foreground: dark,
            background: light,
        };
        Self {
            light_on_dark: dark_on_light.swapped("white"),
            dark_on_light,
        }
    }

    pub fn variants(&self) -> [PaletteVariant; 2] {
        [self.dark_on_light, self.light_on_dark]
    }

    /// Runs `layout` once per variant, stopping at the first failure.
    pub fn for_each<F>(&self, mut layout: F) -> Result<()>
    where
        F: FnMut(&PaletteVariant) -> Result<()>,
    {
        self.variants().iter().try_for_each(|variant| layout(variant))
    }
}

impl Default for PalettePair {
    fn default() -> Self {
        Self::new(BLACK, WHITE)
    }
}
