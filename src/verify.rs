// ── Output verification ───────────────────────────────────────────────────────
//
// Decodes generated files with the `image` crate's PNG decoder, independent of
// the encoder that wrote them, and checks them against the configuration.

use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::android::{FOREGROUND_FILE, LAUNCHER_FILE, ROUND_FILE};
use crate::config::GeneratorConfig;
use crate::error::{AssetError, Result};

/// A PNG that decoded successfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, Default)]
pub struct VerifyReport {
    pub images: Vec<VerifiedImage>,
    /// `(path, reason)` for every file that failed a check.
    pub failures: Vec<(PathBuf, String)>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn a failing report into [`AssetError::Verify`] listing every problem.
    pub fn into_result(self) -> Result<Self> {
        if self.is_ok() {
            return Ok(self);
        }
        let lines: Vec<String> = self
            .failures
            .iter()
            .map(|(p, why)| format!("{}: {why}", p.display()))
            .collect();
        Err(AssetError::Verify(lines.join("; ")))
    }

    fn fail(&mut self, path: &Path, why: impl Into<String>) {
        self.failures.push((path.to_path_buf(), why.into()));
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Walk `dir` recursively, following links, and decode every `.png` file found.
pub fn verify_tree(dir: &Path) -> Result<VerifyReport> {
    if !dir.is_dir() {
        return Err(AssetError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let mut report = VerifyReport::default();
    for entry in walkdir::WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        // Unreadable directories, broken links and link loops are failures too.
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                report.fail(&path, format!("could not be read: {e}"));
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() || !is_png(path) {
            continue;
        }
        match image::open(path) {
            Ok(img) => {
                let (width, height) = img.dimensions();
                log::debug!("verified {} ({width}x{height})", path.display());
                report.images.push(VerifiedImage { path: path.to_path_buf(), width, height });
            }
            Err(e) => report.fail(path, format!("does not decode: {e}")),
        }
    }
    Ok(report)
}

/// Decode `path` and check its size, returning the image when it matches.
fn check_size(report: &mut VerifyReport, path: &Path, width: u32, height: u32) -> Option<image::DynamicImage> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            report.fail(path, format!("does not decode: {e}"));
            return None;
        }
    };
    if img.dimensions() != (width, height) {
        let (w, h) = img.dimensions();
        report.fail(path, format!("is {w}x{h}, expected {width}x{height}"));
        return None;
    }
    report.images.push(VerifiedImage { path: path.to_path_buf(), width, height });
    Some(img)
}

/// Check that every file `config` describes exists under `root` with the
/// configured size.  Placeholders must also carry the configured color, and
/// each round launcher icon must be byte-identical to its square twin.
pub fn verify_expected(root: &Path, config: &GeneratorConfig) -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    let [r, g, b] = config.placeholders.rgb()?;
    for file in &config.placeholders.files {
        let path = root.join(&file.path);
        let Some(img) = check_size(&mut report, &path, file.width, file.height) else { continue };
        let px = img.get_pixel(0, 0).0;
        if px != [r, g, b, 255] {
            report.fail(&path, format!("top-left pixel is {px:?}, expected [{r}, {g}, {b}, 255]"));
        }
    }

    let res_dir = root.join(&config.android.res_dir);
    for density in &config.android.densities {
        let dir = res_dir.join(&density.name);
        for name in [LAUNCHER_FILE, ROUND_FILE, FOREGROUND_FILE] {
            check_size(&mut report, &dir.join(name), density.size, density.size);
        }

        let square = std::fs::read(dir.join(LAUNCHER_FILE));
        let round = std::fs::read(dir.join(ROUND_FILE));
        if let (Ok(square), Ok(round)) = (square, round) {
            if square != round {
                report.fail(&dir.join(ROUND_FILE), format!("differs from {LAUNCHER_FILE}"));
            }
        }
    }

    Ok(report)
}
