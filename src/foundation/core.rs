use crate::foundation::error::{GlyphError, GlyphResult};

/// Pixel dimensions of an output canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Build a size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> GlyphResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphError::validation(format!(
                "canvas size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Pixel area as `u64`.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Integer center (floor division), matching top-left based placement math.
    pub fn center(self) -> Position {
        Position::new(i64::from(self.width / 2), i64::from(self.height / 2))
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
        }
    }
}

/// Top-left coordinate of a sprite footprint on a canvas.
///
/// Signed so a forced placement may overhang the canvas edge; the compositor clips.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
}

impl Position {
    /// Build a position.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Whether a `width x height` footprint at this position lies fully inside `canvas`.
    pub fn fits(self, width: u32, height: u32, canvas: CanvasSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x + i64::from(width) <= i64::from(canvas.width)
            && self.y + i64::from(height) <= i64::from(canvas.height)
    }
}

/// An accepted sprite placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Top-left corner of the rendered sprite.
    pub position: Position,
    /// Rendered sprite width.
    pub width: u32,
    /// Rendered sprite height.
    pub height: u32,
    /// Zero-based attempt index that produced the placement.
    pub attempt: u32,
}
