use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::{
    compose::blend::stroke_over,
    foundation::core::{CanvasSize, Position},
    sprite::model::Sprite,
};

/// The raster a glyph is assembled on.
///
/// Starts fully opaque black; every composite keeps alpha at 255, so flattening to RGB is lossless.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Opaque black canvas of `size`.
    pub fn new(size: CanvasSize) -> Self {
        Self::filled(size, [0, 0, 0])
    }

    /// Opaque canvas of one color.
    pub fn filled(size: CanvasSize, rgb: [u8; 3]) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(
                size.width,
                size.height,
                Rgba([rgb[0], rgb[1], rgb[2], 255]),
            ),
        }
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }

    /// Borrow the RGBA pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether every pixel has alpha 255.
    pub fn is_opaque(&self) -> bool {
        self.pixels.pixels().all(|p| p.0[3] == 255)
    }

    /// Number of pixels whose RGB sum is non-zero.
    pub fn content_pixel_count(&self) -> usize {
        self.pixels
            .pixels()
            .filter(|p| p.0[0] != 0 || p.0[1] != 0 || p.0[2] != 0)
            .count()
    }

    /// Draw `sprite` with its top-left corner at `pos`.
    ///
    /// The stroke is staged through a transparent layer and composited over the canvas.
    /// Parts of the footprint outside the canvas are clipped.
    pub fn composite(&mut self, sprite: &Sprite, pos: Position) {
        let (cw, ch) = (i64::from(self.pixels.width()), i64::from(self.pixels.height()));
        let src = sprite.image();
        let x0 = pos.x.max(0);
        let y0 = pos.y.max(0);
        let x1 = (pos.x + i64::from(src.width())).min(cw);
        let y1 = (pos.y + i64::from(src.height())).min(ch);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let s = src.get_pixel((x - pos.x) as u32, (y - pos.y) as u32).0;
                if s[3] == 0 {
                    continue;
                }
                let d = self.pixels.get_pixel_mut(x as u32, y as u32);
                d.0 = stroke_over(d.0, s);
            }
        }
    }

    /// Drop the alpha channel.
    pub fn into_rgb(self) -> RgbImage {
        let (w, h) = self.pixels.dimensions();
        RgbImage::from_fn(w, h, |x, y| {
            let [r, g, b, _] = self.pixels.get_pixel(x, y).0;
            Rgb([r, g, b])
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/canvas.rs"]
mod tests;
