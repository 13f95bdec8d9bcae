use glam::Vec2;
use image::Rgba;

use super::Canvas;

/// Fill and outline for [`Canvas::ellipse`].  Either part may be omitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseStyle {
    pub fill: Option<Rgba<u8>>,
    pub outline: Option<Rgba<u8>>,
    /// Outline thickness in pixels, measured inward from the bounds.
    pub width: u32,
}

impl EllipseStyle {
    pub fn filled(fill: Rgba<u8>) -> Self {
        Self { fill: Some(fill), outline: None, width: 0 }
    }

    pub fn outlined(outline: Rgba<u8>, width: u32) -> Self {
        Self { fill: None, outline: Some(outline), width }
    }

    pub fn with_outline(mut self, outline: Rgba<u8>, width: u32) -> Self {
        self.outline = Some(outline);
        self.width = width;
        self
    }
}

/// Axis-aligned ellipse inscribed in an inclusive pixel rectangle.
#[derive(Clone, Copy, Debug)]
struct Shape {
    center: Vec2,
    radii: Vec2,
}

impl Shape {
    fn inscribed(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let min = Vec2::new(x0 as f32, y0 as f32);
        let max = Vec2::new(x1 as f32 + 1.0, y1 as f32 + 1.0);
        Self { center: (min + max) * 0.5, radii: (max - min) * 0.5 }
    }

    fn shrunk(self, by: f32) -> Option<Self> {
        let radii = self.radii - Vec2::splat(by);
        (radii.x > 0.0 && radii.y > 0.0).then_some(Self { center: self.center, radii })
    }

    /// True when the pixel whose top-left corner is `(x, y)` has its center
    /// inside the ellipse.
    fn contains(&self, x: i32, y: i32) -> bool {
        let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        ((p - self.center) / self.radii).length_squared() <= 1.0
    }
}

impl Canvas {
    /// Draw an ellipse inscribed in `[x0, y0, x1, y1]` (inclusive corners).
    ///
    /// Outline pixels lie inside the outer ellipse but outside the ellipse
    /// shrunk by `style.width` on every side; fill covers the rest of the
    /// interior.  Degenerate bounds (`x1 < x0` or `y1 < y0`) draw nothing.
    pub fn ellipse(&mut self, bounds: [i32; 4], style: EllipseStyle) {
        let [x0, y0, x1, y1] = bounds;
        if x1 < x0 || y1 < y0 {
            return;
        }

        let outer = Shape::inscribed(x0, y0, x1, y1);
        let inner = match style.outline {
            Some(_) => outer.shrunk(style.width as f32),
            None => Some(outer),
        };

        let xs = x0.max(0)..=x1.min(self.width() as i32 - 1);
        for y in y0.max(0)..=y1.min(self.height() as i32 - 1) {
            for x in xs.clone() {
                if !outer.contains(x, y) {
                    continue;
                }
                let in_fill = inner.is_some_and(|s| s.contains(x, y));
                let color = if in_fill { style.fill } else { style.outline };
                if let Some(c) = color {
                    self.blend_pixel(x, y, c);
                }
            }
        }
    }
}
