/// Result alias for every fallible strokeglyph operation.
pub type GlyphResult<T> = Result<T, GlyphError>;

/// Why a glyph, a group or a whole batch could not be produced.
///
/// Per-stroke placement misses are not errors; they show up as dropped strokes in the report.
#[derive(thiserror::Error, Debug)]
pub enum GlyphError {
    /// A config value, CLI flag or batch option is out of range.
    #[error("invalid configuration: {0}")]
    Validation(String),

    /// A sprite with zero area reached the size planner.
    #[error("degenerate stroke: sprite has zero area ({width}x{height})")]
    DegenerateInput {
        /// Sprite width in pixels.
        width: u32,
        /// Sprite height in pixels.
        height: u32,
    },

    /// A stroke group without any sprites was handed to the assembler.
    #[error("empty group: no strokes to assemble")]
    EmptyGroup,

    /// Filesystem, decode or encode failure, with context attached at the call site.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphError {
    /// Shorthand for [`GlyphError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for [`GlyphError::DegenerateInput`].
    pub fn degenerate(width: u32, height: u32) -> Self {
        Self::DegenerateInput { width, height }
    }

    /// Whether this error came from a zero-area sprite.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateInput { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
