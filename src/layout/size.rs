use image::imageops::{self, FilterType};

use crate::{
    foundation::core::CanvasSize,
    foundation::error::{GlyphError, GlyphResult},
    sprite::model::Sprite,
};

/// Area budget handed to each stroke: `canvas_area / (stroke_count * area_division)`.
///
/// With the default division factor of 0.5 every stroke gets about twice its fair share, so
/// strokes overlap heavily on purpose.
pub fn target_area_per_stroke(canvas: CanvasSize, stroke_count: usize, area_division: f64) -> f64 {
    canvas.area() as f64 / (stroke_count as f64 * area_division)
}

/// Compute the rendered size for a `width x height` sprite.
///
/// One uniform scale `sqrt(target_area * size_factor / area)` is applied to both axes, then each
/// axis is capped at `max_dim` on its own. Capping one axis and not the other changes the aspect
/// ratio; that matches the legacy output and is kept.
pub fn plan_size(
    width: u32,
    height: u32,
    target_area: f64,
    size_factor: f64,
    max_dim: u32,
) -> GlyphResult<(u32, u32)> {
    let area = u64::from(width) * u64::from(height);
    if area == 0 {
        return Err(GlyphError::degenerate(width, height));
    }
    let scale = (target_area * size_factor / area as f64).sqrt();
    if !scale.is_finite() {
        return Err(GlyphError::validation(format!(
            "size planning produced a non-finite scale for {width}x{height}"
        )));
    }

    let axis = |dim: u32| -> u32 {
        let scaled = (f64::from(dim) * scale) as u32;
        scaled.min(max_dim).max(1)
    };
    Ok((axis(width), axis(height)))
}

/// Resample a sprite to exactly `width x height` with a Lanczos filter.
pub fn resize_sprite(sprite: &Sprite, width: u32, height: u32) -> Sprite {
    if sprite.dimensions() == (width, height) {
        return sprite.clone();
    }
    Sprite::from_rgba(imageops::resize(
        sprite.image(),
        width,
        height,
        FilterType::Lanczos3,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/size.rs"]
mod tests;
