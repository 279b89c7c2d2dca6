use std::sync::Arc;

use image::RgbaImage;

/// A decoded stroke raster with straight (non-premultiplied) RGBA8 pixels.
///
/// Sprites are immutable snapshots shared by reference count, so one loaded group can feed
/// several assemblies at once. Operations that change pixels return a new sprite.
#[derive(Clone, Debug)]
pub struct Sprite {
    pixels: Arc<RgbaImage>,
}

impl Sprite {
    /// Wrap an RGBA image. Zero-area images are accepted here and flagged by
    /// [`Sprite::is_degenerate`].
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Build a sprite of one uniform color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_rgba(RgbaImage::from_pixel(width, height, image::Rgba(rgba)))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Pixel area as `u64`.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// True for sprites with no pixels at all.
    pub fn is_degenerate(&self) -> bool {
        self.area() == 0
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<RgbaImage> for Sprite {
    fn from(pixels: RgbaImage) -> Self {
        Self::from_rgba(pixels)
    }
}
