pub mod android;
pub mod color;
pub mod config;
pub mod error;
pub mod placeholders;
pub mod png;
pub mod raster;
pub mod text;
pub mod verify;

use std::path::{Path, PathBuf};

pub use error::{AssetError, Result};

/// A file written by one of the generators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Create `path`'s parent directory (and its ancestors) if missing.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|e| AssetError::io(dir, e))
        }
        _ => Ok(()),
    }
}
