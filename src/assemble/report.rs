use crate::{foundation::core::Placement, sprite::classify::ShapeClass};

/// What happened to one input sprite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteStatus {
    /// Drawn at the given placement.
    Placed(Placement),
    /// Every placement attempt was rejected; the sprite is not in the glyph.
    Dropped,
    /// The sprite had zero area and never reached the compositor.
    Rejected,
}

/// Per-sprite record of an assembly run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteOutcome {
    /// Index of the sprite in the caller's input order.
    pub index: usize,
    /// Aspect-ratio bucket the sprite was drawn from.
    pub class: ShapeClass,
    /// Planned render size, `None` for rejected sprites.
    pub planned_size: Option<(u32, u32)>,
    /// Result of the placement search.
    pub status: SpriteStatus,
}

/// Diagnostics for one assembled glyph, in draw order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    /// One entry per input sprite, in the order they were drawn.
    pub outcomes: Vec<SpriteOutcome>,
    /// Set when nothing could be placed and one sprite was forced onto the canvas.
    pub fallback: Option<Placement>,
}

impl AssemblyReport {
    /// Sprites drawn by the placement search (the fallback is not counted).
    pub fn placed(&self) -> usize {
        self.count(|s| matches!(s, SpriteStatus::Placed(_)))
    }

    /// Sprites whose search was exhausted.
    pub fn dropped(&self) -> usize {
        self.count(|s| matches!(s, SpriteStatus::Dropped))
    }

    /// Zero-area sprites that were skipped.
    pub fn rejected(&self) -> usize {
        self.count(|s| matches!(s, SpriteStatus::Rejected))
    }

    /// Whether the forced fallback placement was used.
    pub fn used_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    fn count(&self, pred: impl Fn(&SpriteStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}
