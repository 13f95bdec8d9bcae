mod builtin;

use std::collections::HashMap;
use std::path::Path;

use image::Rgba;
use serde::Deserialize;

use crate::error::{AssetError, Result};
use crate::raster::{Canvas, Mask};

// ── Glyph ────────────────────────────────────────────────────────────────────

/// Coverage bitmap and metrics for a single character.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// The Unicode character this glyph represents.
    pub id: char,
    /// Coverage at the font's native size.
    pub mask: Mask,
    /// How far to advance the cursor after drawing this glyph, in native pixels.
    pub x_advance: u32,
}

// ── Font ─────────────────────────────────────────────────────────────────────

/// A bitmap font.  Labels are drawn at any pixel size by scaling the native
/// glyphs with `px / line_height`.
#[derive(Debug, Clone)]
pub struct Font {
    /// All glyphs in this font, keyed by character.
    pub glyphs: HashMap<char, Glyph>,
    /// Native glyph row height in pixels.
    pub line_height: u32,
}

impl Font {
    /// The built-in 5×7 dot-matrix font.
    pub fn builtin() -> Self {
        let glyphs = builtin::GLYPHS
            .iter()
            .map(|(ch, rows)| {
                (*ch, Glyph {
                    id: *ch,
                    mask: Mask::from_bits(builtin::GLYPH_W, rows),
                    x_advance: builtin::ADVANCE,
                })
            })
            .collect();
        Self { glyphs, line_height: builtin::GLYPH_H }
    }

    /// Build a `Font` from a PNG atlas and a char-keyed JSON glyph map:
    ///
    /// ```json
    /// { "A": { "x": 0, "y": 0, "w": 16, "h": 24 }, ... }
    /// ```
    ///
    /// Coverage is read from the atlas alpha channel.  `x_advance` is the
    /// glyph width.  Keys longer than one character are ignored; a rectangle
    /// reaching outside the atlas is an error.
    pub fn from_atlas(png_bytes: &[u8], glyph_json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        struct AtlasEntry { x: u32, y: u32, w: u32, h: u32 }

        let raw: HashMap<String, AtlasEntry> = serde_json::from_str(glyph_json)?;
        let atlas = image::load_from_memory(png_bytes)?.to_rgba8();
        let (aw, ah) = atlas.dimensions();

        let mut glyphs = HashMap::new();
        let mut line_height = 0;

        for (key, e) in raw {
            // Only accept single-character keys.
            let mut chars = key.chars();
            let Some(ch) = chars.next() else { continue };
            if chars.next().is_some() { continue; }

            let fits = e.x.checked_add(e.w).is_some_and(|r| r <= aw)
                && e.y.checked_add(e.h).is_some_and(|b| b <= ah);
            if !fits {
                return Err(AssetError::Font(format!(
                    "glyph {ch:?} rect {}x{}+{}+{} lies outside the {aw}x{ah} atlas",
                    e.w, e.h, e.x, e.y
                )));
            }

            let mut coverage = Vec::with_capacity((e.w * e.h) as usize);
            for y in e.y..e.y + e.h {
                for x in e.x..e.x + e.w {
                    coverage.push(atlas.get_pixel(x, y).0[3]);
                }
            }

            line_height = line_height.max(e.h);
            glyphs.insert(ch, Glyph {
                id: ch,
                mask: Mask { width: e.w, height: e.h, coverage },
                x_advance: e.w,
            });
        }

        if glyphs.is_empty() || line_height == 0 {
            return Err(AssetError::Font("glyph map defines no usable glyphs".into()));
        }
        Ok(Self { glyphs, line_height })
    }

    /// Read an atlas PNG and its glyph map from disk.
    pub fn load(atlas: &Path, glyphs: &Path) -> Result<Self> {
        let png = std::fs::read(atlas).map_err(|e| AssetError::io(atlas, e))?;
        let json = std::fs::read_to_string(glyphs).map_err(|e| AssetError::io(glyphs, e))?;
        Self::from_atlas(&png, &json)
    }

    /// Best-effort load: any failure falls back to [`Font::builtin`].
    pub fn load_or_builtin(source: Option<(&Path, &Path)>) -> Self {
        let Some((atlas, glyphs)) = source else {
            return Self::builtin();
        };
        match Self::load(atlas, glyphs) {
            Ok(font) => font,
            Err(e) => {
                log::debug!("font {}: {e}; using built-in font", atlas.display());
                Self::builtin()
            }
        }
    }

    fn scale(&self, px: f32) -> f32 {
        if self.line_height == 0 { 0.0 } else { px / self.line_height as f32 }
    }

    /// Width and height in pixels of `text` rendered at `px`.
    ///
    /// The width runs from the first glyph's left edge to the last glyph's
    /// right edge (no trailing spacing).  Characters absent from the font are
    /// skipped.  Returns `(0, 0)` when nothing is drawable.
    pub fn text_bbox(&self, text: &str, px: f32) -> (u32, u32) {
        let scale = self.scale(px);
        let glyphs: Vec<&Glyph> = text.chars().filter_map(|c| self.glyphs.get(&c)).collect();
        let Some((last, rest)) = glyphs.split_last() else { return (0, 0) };
        let native_w = rest.iter().map(|g| g.x_advance).sum::<u32>() + last.mask.width;

        (
            (native_w as f32 * scale).round() as u32,
            (self.line_height as f32 * scale).round() as u32,
        )
    }
}

// ── draw_text ─────────────────────────────────────────────────────────────────

/// Draw `text` with its bounding box's top-left corner at `origin`.
///
/// # Skipping rules
/// - Characters absent from `font.glyphs` are silently skipped and do not
///   advance the cursor.
/// - Draws nothing when `font.line_height` is zero.
pub fn draw_text(
    canvas: &mut Canvas,
    origin: [i32; 2],
    text: &str,
    font: &Font,
    px: f32,
    color: Rgba<u8>,
) {
    let scale = font.scale(px);
    if scale <= 0.0 {
        return;
    }

    let mut cursor = 0.0f32;
    for glyph in text.chars().filter_map(|c| font.glyphs.get(&c)) {
        let x = origin[0] + cursor.round() as i32;
        canvas.blit_mask(x, origin[1], &glyph.mask, scale, color);
        cursor += glyph.x_advance as f32 * scale;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_the_app_name() {
        let font = Font::builtin();
        for ch in "Orderia".chars() {
            assert!(font.glyphs.contains_key(&ch), "missing {ch:?}");
        }
    }

    #[test]
    fn builtin_glyphs_are_five_by_seven() {
        let font = Font::builtin();
        assert_eq!(font.line_height, 7);
        for g in font.glyphs.values() {
            assert_eq!((g.mask.width, g.mask.height), (5, 7), "{:?}", g.id);
            assert_eq!(g.x_advance, 6);
        }
    }

    #[test]
    fn builtin_has_no_duplicate_entries() {
        assert_eq!(Font::builtin().glyphs.len(), builtin::GLYPHS.len());
    }
}
