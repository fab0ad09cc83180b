use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};

use log::debug;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't read asset {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("asset {} is empty", path.display())]
    Empty { path: PathBuf },
}

/// Raw bytes of a file read from disk, along with where they came from.
#[derive(Clone, Debug)]
pub struct Asset {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Resolves fonts by family/style under a single directory and reads any other
/// input (such as pre-baked strips) by path.
pub struct Loader {
    fonts_dir: PathBuf,
}

impl Loader {
    pub fn new<P: AsRef<Path>>(fonts_dir: P) -> Self {
        Self {
            fonts_dir: fonts_dir.as_ref().to_path_buf(),
        }
    }

    /// `<fonts_dir>/<family>-<style>.ttf`, or `<fonts_dir>/<family>.ttf` when the
    /// style tag is empty.
    pub fn font_path(&self, family: &str, style: &str) -> PathBuf {
        let file_name = if style.is_empty() {
            format!("{family}.ttf")
        } else {
            format!("{family}-{style}.ttf")
        };
        self.fonts_dir.join(file_name)
    }

    pub fn get_font_by_family(&self, family: &str, style: &str) -> Result<Asset, LoadError> {
        self.load(self.font_path(family, style))
    }

    pub fn load<S: AsRef<Path>>(&self, path: S) -> Result<Asset, LoadError> {
        let path = path.as_ref().to_path_buf();
        let mut file = File::open(&path).map_err(|source| LoadError::Unreadable {
            path: path.clone(),
            source,
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| LoadError::Unreadable {
                path: path.clone(),
                source,
            })?;
        if bytes.is_empty() {
            return Err(LoadError::Empty { path });
        }
        debug!("loaded {} ({} bytes)", path.display(), bytes.len());
        Ok(Asset { path, bytes })
    }
}
