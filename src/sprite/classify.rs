use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::sprite::model::Sprite;

/// Coarse aspect-ratio bucket of a sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeClass {
    /// Wider than 1.5x its height.
    Horizontal,
    /// Taller than 1.5x its width.
    Vertical,
    /// Everything else.
    Other,
}

impl ShapeClass {
    /// Bucket order used when interleaving.
    pub const ALL: [ShapeClass; 3] = [Self::Horizontal, Self::Vertical, Self::Other];

    fn bucket(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
            Self::Other => 2,
        }
    }
}

/// Classify a `width x height` footprint. Ratios compare exactly: `2w > 3h` is horizontal.
pub fn classify_dims(width: u32, height: u32) -> ShapeClass {
    let (w, h) = (u64::from(width), u64::from(height));
    if 2 * w > 3 * h {
        ShapeClass::Horizontal
    } else if 2 * h > 3 * w {
        ShapeClass::Vertical
    } else {
        ShapeClass::Other
    }
}

/// Classify a sprite by its aspect ratio.
pub fn classify(sprite: &Sprite) -> ShapeClass {
    classify_dims(sprite.width(), sprite.height())
}

/// Reorder `items` so shape classes alternate.
///
/// Items are bucketed by class (each bucket keeps input order); then a uniformly random
/// non-empty bucket is picked and its next item taken, until every bucket is drained.
pub fn interleave_by_shape<T, R>(
    items: Vec<T>,
    class_of: impl Fn(&T) -> ShapeClass,
    rng: &mut R,
) -> Vec<T>
where
    R: Rng + ?Sized,
{
    let mut buckets: [VecDeque<T>; 3] = Default::default();
    let total = items.len();
    for item in items {
        let b = class_of(&item).bucket();
        buckets[b].push_back(item);
    }

    let mut out = Vec::with_capacity(total);
    loop {
        let non_empty = (0..buckets.len())
            .filter(|&i| !buckets[i].is_empty())
            .collect::<Vec<_>>();
        let Some(&pick) = non_empty.choose(rng) else {
            break;
        };
        if let Some(item) = buckets[pick].pop_front() {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/classify.rs"]
mod tests;
