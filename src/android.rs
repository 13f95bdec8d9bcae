// =============================================================================
// ANDROID.RS — Launcher icons for every mipmap density
//
// Each density bucket gets three files:
// - ic_launcher.png            gradient, shadowed plate, rim, label
// - ic_launcher_round.png      same pixels as ic_launcher.png
// - ic_launcher_foreground.png adaptive-icon layer: transparent, plate + label
//
// All geometry is integer arithmetic on the icon size so every density is a
// proportional redraw rather than a resample.
// =============================================================================

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::config::{AndroidConfig, IconPalette, IconStyle};
use crate::error::{AssetError, Result};
use crate::raster::{Canvas, EllipseStyle};
use crate::text::{Font, draw_text};
use crate::{GeneratedAsset, ensure_parent};

pub const LAUNCHER_FILE: &str = "ic_launcher.png";
pub const ROUND_FILE: &str = "ic_launcher_round.png";
pub const FOREGROUND_FILE: &str = "ic_launcher_foreground.png";

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Pixel measurements of the full launcher icon for a given size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LauncherGeometry {
    /// Gap between the icon edge and the plate's bounding box.
    pub margin: u32,
    /// Plate bounding-box side, `size - 2 * margin`.
    pub plate: u32,
    /// Drop-shadow displacement along both axes.
    pub shadow_offset: u32,
    pub outline_width: u32,
    /// Inset of the inner rim from the plate bounds.
    pub rim_inset: u32,
    pub rim_width: u32,
    /// Label height in pixels.
    pub label_px: u32,
}

impl LauncherGeometry {
    pub fn for_size(size: u32) -> Self {
        let margin = size / 6;
        Self {
            margin,
            plate: size - 2 * margin,
            shadow_offset: size / 40,
            outline_width: (size / 100).max(1),
            rim_inset: (size / 50).max(2),
            rim_width: (size / 120).max(1),
            label_px: (size / 10).max(10),
        }
    }
}

/// Pixel measurements of the adaptive-icon foreground layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForegroundGeometry {
    pub margin: u32,
    pub plate: u32,
    pub outline_width: u32,
    pub label_px: u32,
}

impl ForegroundGeometry {
    pub fn for_size(size: u32) -> Self {
        let margin = size / 4;
        Self {
            margin,
            plate: size - 2 * margin,
            outline_width: (size / 100).max(1),
            label_px: (size / 12).max(8),
        }
    }
}

/// Inclusive square bounds `[m, m, m + side, m + side]` shifted by `offset`.
fn square(m: u32, side: u32, offset: u32) -> [i32; 4] {
    let lo = (m + offset) as i32;
    let hi = (m + side + offset) as i32;
    [lo, lo, hi, hi]
}

/// Top-left corner that centers a `w × h` box on a `size × size` icon.
fn centered(size: u32, (w, h): (u32, u32)) -> [i32; 2] {
    let s = size as i32;
    [(s - w as i32).div_euclid(2), (s - h as i32).div_euclid(2)]
}

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Render the full launcher icon.
pub fn render_launcher(size: u32, style: &IconStyle, palette: &IconPalette, font: &Font) -> RgbaImage {
    let g = LauncherGeometry::for_size(size);
    let mut canvas = Canvas::new(size, size);

    canvas.vertical_gradient(palette.gradient_top, palette.gradient_bottom);

    canvas.ellipse(square(g.margin, g.plate, g.shadow_offset), EllipseStyle::filled(palette.shadow));
    canvas.ellipse(
        square(g.margin, g.plate, 0),
        EllipseStyle::filled(palette.plate_fill).with_outline(palette.plate_outline, g.outline_width),
    );

    // Inner rim: an outline only, inset from the plate edge.
    let rim_side = g.plate.saturating_sub(2 * g.rim_inset);
    canvas.ellipse(
        square(g.margin + g.rim_inset, rim_side, 0),
        EllipseStyle::outlined(palette.plate_rim, g.rim_width),
    );

    let px = g.label_px as f32;
    let [x, y] = centered(size, font.text_bbox(&style.label, px));
    draw_text(&mut canvas, [x + 1, y + 1], &style.label, font, px, palette.text_shadow);
    draw_text(&mut canvas, [x, y], &style.label, font, px, palette.text);

    canvas.into_image()
}

/// Render the adaptive-icon foreground: no background, smaller plate, no
/// shadow or rim, unshadowed label.
pub fn render_foreground(size: u32, style: &IconStyle, palette: &IconPalette, font: &Font) -> RgbaImage {
    let g = ForegroundGeometry::for_size(size);
    let mut canvas = Canvas::new(size, size);

    canvas.ellipse(
        square(g.margin, g.plate, 0),
        EllipseStyle::filled(palette.plate_fill).with_outline(palette.plate_outline, g.outline_width),
    );

    let px = g.label_px as f32;
    let origin = centered(size, font.text_bbox(&style.label, px));
    draw_text(&mut canvas, origin, &style.label, font, px, palette.text);

    canvas.into_image()
}

// ── Generation ────────────────────────────────────────────────────────────────

fn save(img: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    img.save_with_format(path, ImageFormat::Png)?;
    log::info!("Created {}", path.display());
    Ok(())
}

/// Write launcher, round launcher and foreground icons for every configured
/// density under `root / config.res_dir`.
pub fn generate_android_icons(root: &Path, config: &AndroidConfig, font: &Font) -> Result<Vec<GeneratedAsset>> {
    let palette = config.style.palette()?;
    let res_dir = root.join(&config.res_dir);
    let mut written = Vec::with_capacity(config.densities.len() * 3);

    for density in &config.densities {
        if density.size == 0 {
            return Err(AssetError::InvalidDimensions { width: 0, height: 0 });
        }
        let dir = res_dir.join(&density.name);
        let size = density.size;

        let launcher = render_launcher(size, &config.style, &palette, font);
        let foreground = render_foreground(size, &config.style, &palette, font);

        for (img, name) in [(&launcher, LAUNCHER_FILE), (&launcher, ROUND_FILE), (&foreground, FOREGROUND_FILE)] {
            let path = dir.join(name);
            save(img, &path)?;
            written.push(GeneratedAsset { path, width: size, height: size });
        }
    }

    log::info!("Android icons updated for {} densities", config.densities.len());
    Ok(written)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_geometry_at_mdpi() {
        let g = LauncherGeometry::for_size(48);
        assert_eq!(g, LauncherGeometry {
            margin: 8,
            plate: 32,
            shadow_offset: 1,
            outline_width: 1,
            rim_inset: 2,
            rim_width: 1,
            label_px: 10,
        });
    }

    #[test]
    fn launcher_geometry_at_xxxhdpi() {
        let g = LauncherGeometry::for_size(192);
        assert_eq!(g.margin, 32);
        assert_eq!(g.plate, 128);
        assert_eq!(g.shadow_offset, 4);
        assert_eq!(g.rim_inset, 3);
        assert_eq!(g.label_px, 19);
    }

    #[test]
    fn foreground_geometry_uses_quarter_margin() {
        let g = ForegroundGeometry::for_size(144);
        assert_eq!(g.margin, 36);
        assert_eq!(g.plate, 72);
        assert_eq!(g.outline_width, 1);
        assert_eq!(g.label_px, 12);
        assert_eq!(ForegroundGeometry::for_size(48).label_px, 8);
    }

    #[test]
    fn centered_floors_negative_offsets() {
        // Label wider than the icon: (48 - 59) / 2 floors to -6.
        assert_eq!(centered(48, (59, 14)), [-6, 17]);
    }

    #[test]
    fn square_bounds_are_inclusive_and_offset() {
        assert_eq!(square(8, 32, 1), [9, 9, 41, 41]);
    }
}
