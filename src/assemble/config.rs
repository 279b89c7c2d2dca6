use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    compose::placer::PlacementOpts,
    foundation::core::CanvasSize,
    foundation::error::{GlyphError, GlyphResult},
};

/// Side length of the reference frame the legacy fallback centered its sprite in.
pub const LEGACY_FALLBACK_FRAME: u32 = 500;

/// Frame used to center the forced placement when no stroke could be placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackFrame {
    /// Center on the actual canvas.
    #[default]
    Canvas,
    /// Center in a fixed 500x500 frame regardless of canvas size (legacy output).
    Legacy,
}

impl FallbackFrame {
    /// Reference frame for a given canvas.
    pub fn reference(self, canvas: CanvasSize) -> CanvasSize {
        match self {
            Self::Canvas => canvas,
            Self::Legacy => CanvasSize {
                width: LEGACY_FALLBACK_FRAME,
                height: LEGACY_FALLBACK_FRAME,
            },
        }
    }
}

/// Tunables for assembling one glyph.
///
/// Deserializes from JSON; every field is optional and falls back to [`Default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyConfig {
    /// Output canvas size.
    pub canvas: CanvasSize,
    /// Per-axis cap on a rendered stroke.
    pub max_dim: u32,
    /// Center pull reached on the last placement attempt.
    pub center_attraction: f64,
    /// Placement attempts per stroke.
    pub max_attempts: u32,
    /// Exclusive overlap ratio bound for accepting a position.
    pub overlap_threshold: f64,
    /// Enlargement applied on top of each stroke's area budget.
    pub size_factor: f64,
    /// Divisor in `canvas_area / (stroke_count * area_division)`.
    pub area_division: f64,
    /// Seed for reproducible runs; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Snap near-white and near-black stroke pixels before layout.
    pub normalize_strokes: bool,
    /// Reference frame for the forced fallback placement.
    pub fallback_frame: FallbackFrame,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        let placement = PlacementOpts::default();
        Self {
            canvas: CanvasSize::default(),
            max_dim: 500,
            center_attraction: placement.center_attraction,
            max_attempts: placement.max_attempts,
            overlap_threshold: placement.overlap_threshold,
            size_factor: 1.5,
            area_division: 0.5,
            seed: None,
            normalize_strokes: true,
            fallback_frame: FallbackFrame::Canvas,
        }
    }
}

impl AssemblyConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GlyphResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| GlyphError::validation(format!("parse assembly config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GlyphError::validation(format!("open assembly config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges.
    pub fn validate(&self) -> GlyphResult<()> {
        CanvasSize::new(self.canvas.width, self.canvas.height)?;
        if self.max_dim == 0 {
            return Err(GlyphError::validation("max_dim must be >= 1"));
        }
        if self.max_attempts == 0 {
            return Err(GlyphError::validation("max_attempts must be >= 1"));
        }
        if !self.center_attraction.is_finite() || self.center_attraction < 0.0 {
            return Err(GlyphError::validation(
                "center_attraction must be a finite value >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.overlap_threshold) {
            return Err(GlyphError::validation(
                "overlap_threshold must be within [0, 1]",
            ));
        }
        if !self.size_factor.is_finite() || self.size_factor <= 0.0 {
            return Err(GlyphError::validation("size_factor must be > 0"));
        }
        if !self.area_division.is_finite() || self.area_division <= 0.0 {
            return Err(GlyphError::validation("area_division must be > 0"));
        }
        Ok(())
    }

    /// Options handed to the placement search.
    pub fn placement_opts(&self) -> PlacementOpts {
        PlacementOpts {
            center_attraction: self.center_attraction,
            max_attempts: self.max_attempts,
            overlap_threshold: self.overlap_threshold,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/config.rs"]
mod tests;
