use crate::error::{BakeError, Result};

/// Subtracted from the base point size before halving it.
const DERIVED_POINT_SIZE_CORRECTION: u32 = 4;

pub const SMALL_TAG: &str = "small";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(BakeError::InvalidConfig(format!(
                "cell size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    pub fn halved(&self) -> Result<Self> {
        Self::new(self.width / 2, self.height / 2)
    }
}

/// One output scale: the point size glyphs are rasterized at and the cell they
/// are centered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolutionTier {
    pub point_size: u32,
    pub cell: CellSize,
    /// Extra filename segment, `None` for the base tier.
    pub tag: Option<&'static str>,
}

impl ResolutionTier {
    pub fn new(point_size: u32, cell_width: u32, cell_height: u32) -> Result<Self> {
        if point_size == 0 {
            return Err(BakeError::InvalidConfig("point size must be positive".into()));
        }
        Ok(Self {
            point_size,
            cell: CellSize::new(cell_width, cell_height)?,
            tag: None,
        })
    }

    /// The secondary tier: `(point_size - 4) / 2` with both cell dimensions halved.
    pub fn derived_small(&self) -> Result<Self> {
        let point_size = self
            .point_size
            .checked_sub(DERIVED_POINT_SIZE_CORRECTION)
            .map(|pt| pt / 2)
            .filter(|pt| *pt > 0)
            .ok_or_else(|| {
                BakeError::InvalidConfig(format!(
                    "point size {} is too small to derive a {SMALL_TAG} tier",
                    self.point_size
                ))
            })?;
        Ok(Self {
            point_size,
            cell: self.cell.halved()?,
            tag: Some(SMALL_TAG),
        })
    }

    /// The base tier followed by its derived tier when `with_small` is set.
    pub fn with_derived(self, with_small: bool) -> Result<Vec<Self>> {
        let mut tiers = Vec::with_capacity(2);
        let small = with_small.then(|| self.derived_small()).transpose()?;
        tiers.push(self);
        tiers.extend(small);
        Ok(tiers)
    }
}
