use crate::{compose::canvas::Canvas, foundation::core::Position, sprite::model::Sprite};

/// Overlap threshold used when none is configured.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;

/// Fraction of the sprite's visible pixels that would land on canvas content.
///
/// A canvas pixel counts as content when its R+G+B sum is non-zero. This is a heuristic, not an
/// occupancy map: a stroke that composites to pure black leaves no trace for later checks.
///
/// Returns `None` when the footprint at `pos` leaves the canvas, and `Some(0.0)` for a sprite
/// with no visible pixels.
pub fn overlap_ratio(canvas: &Canvas, sprite: &Sprite, pos: Position) -> Option<f64> {
    let (w, h) = sprite.dimensions();
    if !pos.fits(w, h, canvas.size()) {
        return None;
    }

    let src = sprite.image();
    let dst = canvas.pixels();
    let (ox, oy) = (pos.x as u32, pos.y as u32);
    let mut visible = 0u64;
    let mut covered = 0u64;
    for (x, y, px) in src.enumerate_pixels() {
        if px.0[3] == 0 {
            continue;
        }
        visible += 1;
        let [r, g, b, _] = dst.get_pixel(ox + x, oy + y).0;
        if u16::from(r) + u16::from(g) + u16::from(b) > 0 {
            covered += 1;
        }
    }

    if visible == 0 {
        return Some(0.0);
    }
    Some(covered as f64 / visible as f64)
}

/// Whether placing `sprite` at `pos` overlaps existing content by more than `threshold`.
///
/// Out-of-bounds footprints always count as overlapping.
pub fn is_overlapping(canvas: &Canvas, sprite: &Sprite, pos: Position, threshold: f64) -> bool {
    match overlap_ratio(canvas, sprite, pos) {
        Some(ratio) => ratio > threshold,
        None => true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/overlap.rs"]
mod tests;
