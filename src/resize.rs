use std::{fmt, fs, path::PathBuf, str::FromStr};

use digibake_asset::loader::Loader;
use image::{imageops, ImageFormat, RgbaImage};
use log::info;

use crate::{
    canvas::save_png,
    error::{BakeError, Result},
    naming::OutputNamingScheme,
};

/// How non-identity scales are resampled. Picked per invocation, never inferred
/// from the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Resampling {
    /// Lanczos; for sources with soft, continuous-tone edges.
    Smooth,
    /// Nearest neighbor; keeps already pixel-crisp sources crisp.
    Nearest,
}

impl Resampling {
    fn filter(self) -> imageops::FilterType {
        match self {
            Resampling::Smooth => imageops::FilterType::Lanczos3,
            Resampling::Nearest => imageops::FilterType::Nearest,
        }
    }
}

/// Largest width or height a derivative may have.
pub const MAX_DIMENSION: u32 = 1 << 14;

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleFactor {
    pub name: String,
    pub factor: f32,
}

impl ScaleFactor {
    pub fn new(name: impl Into<String>, factor: f32) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BakeError::InvalidConfig("scale name must not be empty".into()));
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(BakeError::InvalidConfig(format!(
                "scale factor for {name} must be positive, got {factor}"
            )));
        }
        Ok(Self { name, factor })
    }

    pub fn is_identity(&self) -> bool {
        self.factor == 1.0
    }

    /// `(round(width * factor), round(height * factor))`, or `None` when either
    /// side would exceed [MAX_DIMENSION].
    pub fn apply(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        let scale = |v: u32| {
            let scaled = (f64::from(v) * f64::from(self.factor)).round();
            (scaled <= f64::from(MAX_DIMENSION)).then_some(scaled as u32)
        };
        Some((scale(width)?, scale(height)?))
    }
}

impl FromStr for ScaleFactor {
    type Err = BakeError;

    /// Parses `name=factor`, e.g. `small=0.5`.
    fn from_str(s: &str) -> Result<Self> {
        let (name, factor) = s.split_once('=').ok_or_else(|| {
            BakeError::InvalidConfig(format!("expected <name>=<factor>, got {s:?}"))
        })?;
        let factor = factor
            .trim()
            .parse::<f32>()
            .map_err(|err| BakeError::InvalidConfig(format!("bad factor in {s:?}: {err}")))?;
        Self::new(name.trim(), factor)
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.factor)
    }
}

pub fn default_scales() -> Vec<ScaleFactor> {
    vec![
        ScaleFactor {
            name: "small".into(),
            factor: 0.5,
        },
        ScaleFactor {
            name: "medium".into(),
            factor: 1.0,
        },
        ScaleFactor {
            name: "large".into(),
            factor: 2.0,
        },
    ]
}

#[derive(Clone, Debug)]
pub struct ResizeConfig {
    pub prefix: String,
    pub scales: Vec<ScaleFactor>,
    pub resampling: Resampling,
    /// Addressable slots in the source strip: ten digits, or eleven with a
    /// trailing blank.
    pub element_count: u32,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            prefix: "stolen_numbers".into(),
            scales: default_scales(),
            resampling: Resampling::Smooth,
            element_count: 11,
        }
    }
}

/// A strip resampled at one scale factor.
#[derive(Clone, Debug)]
pub struct ScaleDerivative {
    pub name: String,
    pub factor: f32,
    pub image: RgbaImage,
    pub element_count: u32,
}

impl ScaleDerivative {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pitch(&self) -> f32 {
        self.width() as f32 / self.element_count as f32
    }

    /// Left edge of element `index`.
    pub fn element_x(&self, index: u32) -> f32 {
        index as f32 * self.pitch()
    }
}

pub struct ResizePipeline {
    config: ResizeConfig,
}

impl ResizePipeline {
    pub fn new(config: ResizeConfig) -> Result<Self> {
        if config.scales.is_empty() {
            return Err(BakeError::InvalidConfig("no scale factors given".into()));
        }
        if config.element_count == 0 {
            return Err(BakeError::InvalidConfig("element count must be positive".into()));
        }
        for scale in &config.scales {
            ScaleFactor::new(scale.name.clone(), scale.factor)?;
        }
        Ok(Self { config })
    }

    /// Output size for `scale` applied to a `width` x `height` strip.
    pub fn target_size(
        &self,
        width: u32,
        height: u32,
        scale: &ScaleFactor,
    ) -> Result<(u32, u32)> {
        match scale.apply(width, height) {
            None => Err(BakeError::InvalidConfig(format!(
                "{scale} grows a {width}x{height} strip past {MAX_DIMENSION}px"
            ))),
            Some((0, _)) | Some((_, 0)) => Err(BakeError::InvalidConfig(format!(
                "{scale} shrinks a {width}x{height} strip to nothing"
            ))),
            Some(size) => Ok(size),
        }
    }

    pub fn derive(&self, source: &RgbaImage, scale: &ScaleFactor) -> Result<ScaleDerivative> {
        let image = if scale.is_identity() {
            source.clone()
        } else {
            let (width, height) = self.target_size(source.width(), source.height(), scale)?;
            imageops::resize(source, width, height, self.config.resampling.filter())
        };
        Ok(ScaleDerivative {
            name: scale.name.clone(),
            factor: scale.factor,
            image,
            element_count: self.config.element_count,
        })
    }

    /// Loads the baked PNG strip at `source` and writes one file per scale. The
    /// identity scale copies the source file byte for byte. Every scale is
    /// checked against the source size before anything is written.
    pub fn run(
        &self,
        loader: &Loader,
        source: impl Into<PathBuf>,
        naming: &OutputNamingScheme,
    ) -> Result<Vec<PathBuf>> {
        let asset = loader.load(source.into())?;
        let strip = image::load_from_memory_with_format(&asset.bytes, ImageFormat::Png)
            .map_err(|err| BakeError::CorruptResource {
                path: asset.path.clone(),
                kind: "PNG strip",
                reason: err.to_string(),
            })?
            .to_rgba8();
        info!(
            "source {}: {}x{}",
            asset.path.display(),
            strip.width(),
            strip.height()
        );

        for scale in self.config.scales.iter().filter(|s| !s.is_identity()) {
            self.target_size(strip.width(), strip.height(), scale)?;
        }

        naming.prepare()?;
        let mut written = Vec::with_capacity(self.config.scales.len());
        for scale in &self.config.scales {
            let derivative = self.derive(&strip, scale)?;
            let path = naming.derivative(
                &self.config.prefix,
                &derivative.name,
                derivative.width(),
                derivative.height(),
            );
            if scale.is_identity() {
                fs::write(&path, &asset.bytes)
                    .map_err(|err| BakeError::output_write(&path, err))?;
            } else {
                save_png(&derivative.image, &path)?;
            }
            info!(
                "{}: {}x{} ({:.1}px per element) -> {}",
                derivative.name,
                derivative.width(),
                derivative.height(),
                derivative.pitch(),
                path.display()
            );
            written.push(path);
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 0, 255])
        })
    }

    fn pipeline(resampling: Resampling, element_count: u32) -> ResizePipeline {
        ResizePipeline::new(ResizeConfig {
            resampling,
            element_count,
            ..ResizeConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn identity_is_a_verbatim_copy() {
        let source = strip(240, 30);
        let medium = ScaleFactor::new("medium", 1.0).unwrap();
        let out = pipeline(Resampling::Smooth, 11).derive(&source, &medium).unwrap();
        assert_eq!(out.image.as_raw(), source.as_raw());
    }

    #[test]
    fn double_and_half_sizes() {
        let source = strip(240, 30);
        for resampling in [Resampling::Smooth, Resampling::Nearest] {
            let p = pipeline(resampling, 10);
            let large = p.derive(&source, &ScaleFactor::new("large", 2.0).unwrap()).unwrap();
            assert_eq!(large.image.dimensions(), (480, 60));
            let small = p.derive(&source, &ScaleFactor::new("small", 0.5).unwrap()).unwrap();
            assert_eq!(small.image.dimensions(), (120, 15));
        }
    }

    #[test]
    fn pitch_follows_output_width() {
        let source = strip(240, 30);
        for element_count in [10, 11] {
            let p = pipeline(Resampling::Nearest, element_count);
            for scale in default_scales() {
                let out = p.derive(&source, &scale).unwrap();
                assert_eq!(out.pitch(), out.width() as f32 / element_count as f32);
                assert_eq!(out.element_x(3), 3.0 * out.pitch());
            }
        }
        let ten = pipeline(Resampling::Nearest, 10)
            .derive(&source, &ScaleFactor::new("small", 0.5).unwrap())
            .unwrap();
        assert_eq!(ten.pitch(), 12.0);
    }

    #[test]
    fn nearest_doubling_keeps_hard_edges() {
        let source = strip(4, 2);
        let out = pipeline(Resampling::Nearest, 2)
            .derive(&source, &ScaleFactor::new("large", 2.0).unwrap())
            .unwrap();
        for (x, y, pixel) in out.image.enumerate_pixels() {
            assert_eq!(pixel, source.get_pixel(x / 2, y / 2));
        }
    }

    #[test]
    fn dimensions_round_to_nearest() {
        let scale = ScaleFactor::new("odd", 0.5).unwrap();
        assert_eq!(scale.apply(25, 3), Some((13, 2)));
        let third = ScaleFactor::new("third", 1.0 / 3.0).unwrap();
        assert_eq!(third.apply(240, 30), Some((80, 10)));
    }

    #[test]
    fn vanishing_output_is_rejected() {
        let source = strip(4, 1);
        let tiny = ScaleFactor::new("tiny", 0.1).unwrap();
        assert!(pipeline(Resampling::Smooth, 1).derive(&source, &tiny).is_err());
    }

    #[test]
    fn oversized_output_is_rejected_before_allocating() {
        let source = RgbaImage::new(240, 30);
        let huge: ScaleFactor = "huge=1e9".parse().unwrap();
        assert_eq!(huge.apply(240, 30), None);
        let err = pipeline(Resampling::Smooth, 11).derive(&source, &huge).unwrap_err();
        assert!(matches!(err, BakeError::InvalidConfig(_)));

        let wide = ScaleFactor::new("wide", 100.0).unwrap();
        assert!(pipeline(Resampling::Nearest, 11).derive(&source, &wide).is_err());

        let edge = ScaleFactor::new("edge", 1.0).unwrap();
        assert_eq!(edge.apply(MAX_DIMENSION, 1), Some((MAX_DIMENSION, 1)));
    }

    #[test]
    fn scale_factor_parsing() {
        let parsed: ScaleFactor = "small=0.5".parse().unwrap();
        assert_eq!(parsed, ScaleFactor::new("small", 0.5).unwrap());
        assert_eq!(parsed.to_string(), "small=0.5");
        for bad in ["small", "small=", "=2", "huge=-1", "nan=NaN", "zero=0"] {
            assert!(bad.parse::<ScaleFactor>().is_err(), "{bad}");
        }
    }

    #[test]
    fn bad_configs_are_rejected() {
        let empty = ResizeConfig {
            scales: Vec::new(),
            ..ResizeConfig::default()
        };
        assert!(ResizePipeline::new(empty).is_err());

        let no_elements = ResizeConfig {
            element_count: 0,
            ..ResizeConfig::default()
        };
        assert!(ResizePipeline::new(no_elements).is_err());

        let negative = ResizeConfig {
            scales: vec![ScaleFactor {
                name: "flip".into(),
                factor: -1.0,
            }],
            ..ResizeConfig::default()
        };
        assert!(ResizePipeline::new(negative).is_err());
    }
}
