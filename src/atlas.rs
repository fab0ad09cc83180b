use image::RgbaImage;

use crate::tier::CellSize;

pub const DIGIT_COUNT: u32 = 10;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Fixed-pitch, single-row layout: slot `i` occupies columns
/// `[i * cell.width, (i + 1) * cell.width)`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct StripLayout {
    cell: CellSize,
    slots: u32,
}

impl StripLayout {
    pub fn digits(cell: CellSize) -> Self {
        Self {
            cell,
            slots: DIGIT_COUNT,
        }
    }

    pub fn width(&self) -> u32 {
        self.cell.width * self.slots
    }

    pub fn height(&self) -> u32 {
        self.cell.height
    }

    pub fn get_rect(&self, slot: u32) -> Option<Rect> {
        (slot < self.slots).then(|| Rect {
            x: slot * self.cell.width,
            y: 0,
            w: self.cell.width,
            h: self.cell.height,
        })
    }
}

/// A baked strip: ten digit cells addressed by digit value.
#[derive(Clone, Debug)]
pub struct Strip {
    layout: StripLayout,
    image: RgbaImage,
}

impl Strip {
    pub(crate) fn new(layout: StripLayout, image: RgbaImage) -> Self {
        debug_assert_eq!(image.dimensions(), (layout.width(), layout.height()));
        Self { layout, image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Copies out the cell for `digit`.
    pub fn cell_image(&self, digit: u8) -> Option<RgbaImage> {
        let rect = self.layout.get_rect(u32::from(digit))?;
        Some(image::imageops::crop_imm(&self.image, rect.x, rect.y, rect.w, rect.h).to_image())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_rects_tile_the_strip() {
        let layout = StripLayout::digits(CellSize::new(48, 68).unwrap());
        assert_eq!(layout.width(), 480);
        assert_eq!(layout.height(), 68);

        for digit in 0..DIGIT_COUNT {
            let rect = layout.get_rect(digit).unwrap();
            assert_eq!(rect.x, digit * 48);
            assert_eq!(rect.x + rect.w, (digit + 1) * 48);
            assert_eq!((rect.y, rect.h), (0, 68));
        }
    }

    #[test]
    fn out_of_range_slot_has_no_rect() {
        let layout = StripLayout::digits(CellSize::new(24, 34).unwrap());
        assert!(layout.get_rect(DIGIT_COUNT).is_none());
    }

    #[test]
    fn cell_image_crops_the_right_columns() {
        let layout = StripLayout::digits(CellSize::new(2, 1).unwrap());
        let image = RgbaImage::from_fn(20, 1, |x, _| image::Rgba([x as u8, 0, 0, 255]));
        let strip = Strip::new(layout, image);

        let cell = strip.cell_image(7).unwrap();
        assert_eq!(cell.dimensions(), (2, 1));
        assert_eq!(cell.get_pixel(0, 0).0[0], 14);
        assert_eq!(cell.get_pixel(1, 0).0[0], 15);
        assert!(strip.cell_image(10).is_none());
    }
}
