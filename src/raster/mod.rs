// ── Raster canvas ─────────────────────────────────────────────────────────────
//
// A thin drawing layer over `image::RgbaImage`.  All shapes take signed pixel
// coordinates and are clipped to the canvas; every write goes through
// `blend_pixel`, which composites source-over.

pub mod ellipse;
pub mod gradient;

use image::{Rgba, RgbaImage};

use crate::color::blend_over;

pub use ellipse::EllipseStyle;

// ── Mask ──────────────────────────────────────────────────────────────────────

/// 8-bit coverage bitmap, row-major.  `255` is fully covered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<u8>,
}

impl Mask {
    /// Build a mask from `0`/`1` rows, e.g. a hand-drawn glyph.
    pub fn from_bits(width: u32, rows: &[u32]) -> Self {
        let mut coverage = Vec::with_capacity(width as usize * rows.len());
        for &row in rows {
            for x in 0..width {
                let bit = (row >> (width - 1 - x)) & 1;
                coverage.push(if bit == 1 { 255 } else { 0 });
            }
        }
        Self { width, height: rows.len() as u32, coverage }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.coverage[(y * self.width + x) as usize]
    }
}

// ── Canvas ────────────────────────────────────────────────────────────────────

pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self { img: RgbaImage::new(width, height) }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.img.get_pixel_checked(x as u32, y as u32).copied()
    }

    /// Composite `color` over the pixel at `(x, y)`.  Out-of-bounds writes are
    /// ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(px) = self.img.get_pixel_mut_checked(x as u32, y as u32) {
            *px = blend_over(*px, color);
        }
    }

    /// Draw `mask` with its top-left corner at `(x, y)`, scaled by `scale`
    /// using nearest-neighbour sampling.  Coverage multiplies `color`'s alpha.
    pub fn blit_mask(&mut self, x: i32, y: i32, mask: &Mask, scale: f32, color: Rgba<u8>) {
        if scale <= 0.0 || mask.width == 0 || mask.height == 0 {
            return;
        }
        let out_w = (mask.width as f32 * scale).round() as i32;
        let out_h = (mask.height as f32 * scale).round() as i32;

        for dy in 0..out_h {
            let sy = ((dy as f32 / scale) as u32).min(mask.height - 1);
            for dx in 0..out_w {
                let sx = ((dx as f32 / scale) as u32).min(mask.width - 1);
                let cov = mask.get(sx, sy) as u32;
                if cov == 0 {
                    continue;
                }
                let alpha = (color.0[3] as u32 * cov + 127) / 255;
                let mut c = color;
                c.0[3] = alpha as u8;
                self.blend_pixel(x + dx, y + dy, c);
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
