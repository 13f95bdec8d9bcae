// ── Solid-color placeholders ──────────────────────────────────────────────────
//
// Writes the app icon, adaptive icon, splash and favicon as single-color RGB
// PNGs through the hand-assembled encoder in `crate::png`.

use std::path::Path;

use crate::config::PlaceholderConfig;
use crate::error::{AssetError, Result};
use crate::png::encode_solid;
use crate::{GeneratedAsset, ensure_parent};

/// Write every configured placeholder under `root`.
///
/// Parent directories are created as needed; existing files are overwritten.
pub fn generate_placeholders(root: &Path, config: &PlaceholderConfig) -> Result<Vec<GeneratedAsset>> {
    let rgb = config.rgb()?;
    let mut written = Vec::with_capacity(config.files.len());

    for file in &config.files {
        let path = root.join(&file.path);
        let bytes = encode_solid(file.width, file.height, rgb)?;

        ensure_parent(&path)?;
        std::fs::write(&path, &bytes).map_err(|e| AssetError::io(&path, e))?;

        log::info!("Created {} ({}x{})", path.display(), file.width, file.height);
        written.push(GeneratedAsset { path, width: file.width, height: file.height });
    }

    log::info!("All {} placeholder PNGs created", written.len());
    Ok(written)
}
