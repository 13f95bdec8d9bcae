use image::Rgba;

use super::Canvas;
use crate::color::lerp_channel;

impl Canvas {
    /// Fill the whole canvas with an opaque top-to-bottom gradient.
    ///
    /// Row `y` is `lerp(top, bottom, y / height)` per channel, so the first row
    /// is exactly `top` and the last row stops one step short of `bottom`.
    pub fn vertical_gradient(&mut self, top: Rgba<u8>, bottom: Rgba<u8>) {
        let height = self.height();
        if height == 0 {
            return;
        }
        for y in 0..height {
            let ratio = y as f32 / height as f32;
            let row = Rgba([
                lerp_channel(top.0[0], bottom.0[0], ratio),
                lerp_channel(top.0[1], bottom.0[1], ratio),
                lerp_channel(top.0[2], bottom.0[2], ratio),
                255,
            ]);
            for x in 0..self.width() {
                self.img.put_pixel(x, y, row);
            }
        }
    }
}
