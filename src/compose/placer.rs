use rand::Rng;

use crate::{
    compose::canvas::Canvas,
    foundation::core::{Placement, Position},
    layout::overlap::{DEFAULT_OVERLAP_THRESHOLD, is_overlapping},
    sprite::model::Sprite,
};

/// Knobs for the randomized position search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementOpts {
    /// Strength of the pull toward the canvas center reached at the last attempt.
    pub center_attraction: f64,
    /// Number of candidate positions tried before the sprite is dropped.
    pub max_attempts: u32,
    /// Exclusive upper bound on the accepted overlap ratio.
    pub overlap_threshold: f64,
}

impl Default for PlacementOpts {
    fn default() -> Self {
        Self {
            center_attraction: 0.65,
            max_attempts: 150,
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
        }
    }
}

/// Search for a position for `sprite` and draw it onto `canvas`.
///
/// Each attempt samples a base position in the middle band of the canvas, then pulls it toward
/// the center by `min(1, attempt / max_attempts * center_attraction)`: early attempts are close
/// to uniform, late ones are strongly centered. The first candidate the overlap check accepts is
/// composited and returned.
///
/// On `None` the canvas is untouched and the sprite should be dropped.
pub fn place_sprite<R>(
    canvas: &mut Canvas,
    sprite: &Sprite,
    opts: &PlacementOpts,
    rng: &mut R,
) -> Option<Placement>
where
    R: Rng + ?Sized,
{
    let size = canvas.size();
    let (w, h) = sprite.dimensions();
    let (Some(x_band), Some(y_band)) = (base_band(size.width, w), base_band(size.height, h)) else {
        tracing::debug!(
            sprite_w = w,
            sprite_h = h,
            canvas_w = size.width,
            canvas_h = size.height,
            "sprite larger than canvas, no position can fit"
        );
        return None;
    };

    let center = size.center();
    let max_x = i64::from(size.width) - i64::from(w);
    let max_y = i64::from(size.height) - i64::from(h);

    for attempt in 0..opts.max_attempts {
        let base_x = rng.gen_range(x_band.0..=x_band.1);
        let base_y = rng.gen_range(y_band.0..=y_band.1);

        let dist_x = center.x - (base_x + i64::from(w / 2));
        let dist_y = center.y - (base_y + i64::from(h / 2));
        let pull = attraction(attempt, opts.max_attempts, opts.center_attraction);

        let x = ((base_x as f64 + dist_x as f64 * pull) as i64).min(max_x).max(0);
        let y = ((base_y as f64 + dist_y as f64 * pull) as i64).min(max_y).max(0);
        let pos = Position::new(x, y);

        if !is_overlapping(canvas, sprite, pos, opts.overlap_threshold) {
            canvas.composite(sprite, pos);
            tracing::trace!(x, y, attempt, "sprite placed");
            return Some(Placement {
                position: pos,
                width: w,
                height: h,
                attempt,
            });
        }
    }

    tracing::debug!(
        sprite_w = w,
        sprite_h = h,
        attempts = opts.max_attempts,
        "placement attempts exhausted"
    );
    None
}

/// Pull factor for `attempt`, ramping linearly and saturating at 1.
pub fn attraction(attempt: u32, max_attempts: u32, center_attraction: f64) -> f64 {
    if max_attempts == 0 {
        return 0.0;
    }
    (f64::from(attempt) / f64::from(max_attempts) * center_attraction).min(1.0)
}

/// Inclusive range of base offsets along one axis.
///
/// The band spans a third of the canvas on each side of the center, trimmed so the footprint
/// stays on canvas. When trimming empties it, the band falls back to every fitting offset.
/// `None` when the sprite is longer than the canvas on this axis.
fn base_band(canvas_len: u32, sprite_len: u32) -> Option<(i64, i64)> {
    let c = i64::from(canvas_len);
    let s = i64::from(sprite_len);
    if s > c {
        return None;
    }
    let mid = c / 2;
    let third = c / 3;
    let lo = (mid - third).max(0);
    let hi = (c - s).min(mid + third);
    if lo <= hi { Some((lo, hi)) } else { Some((0, c - s)) }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/placer.rs"]
mod tests;
