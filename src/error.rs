use std::path::PathBuf;

use digibake_asset::loader::LoadError;

pub type Result<T> = std::result::Result<T, BakeError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every variant aborts the batch; a failed run is simply re-executed.
#[derive(Debug, thiserror::Error)]
pub enum BakeError {
    #[error(transparent)]
    ResourceNotFound(#[from] LoadError),

    #[error("{} is not a usable {kind}: {reason}", path.display())]
    CorruptResource {
        path: PathBuf,
        kind: &'static str,
        reason: String,
    },

    #[error("font {font} has no glyph for '{character}'")]
    MissingGlyph { font: String, character: char },

    #[error("couldn't write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("'{0}' is not a digit in 0-9")]
    UnsupportedCharacter(char),
}

impl BakeError {
    pub(crate) fn output_write<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::OutputWrite {
            path: path.into(),
            source: source.into(),
        }
    }

    /// True for errors caused by an input that couldn't be found or read.
    pub fn is_resource_error(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound(_) | Self::CorruptResource { .. } | Self::MissingGlyph { .. }
        )
    }
}
