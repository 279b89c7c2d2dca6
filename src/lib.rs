//! strokeglyph synthesizes character-like glyph rasters from pre-segmented stroke sprites.
//!
//! Each glyph is built from one [`StrokeGroup`]: the strokes are normalized, interleaved by
//! shape, scaled to a shared area budget and dropped onto a square black canvas by a randomized,
//! center-biased search that rejects heavily overlapping positions. The public API is layered:
//!
//! - Per-sprite passes: [`normalize_sprite`], [`classify`], [`plan_size`]
//! - Compositing: [`Canvas`], [`place_sprite`], [`overlap_ratio`]
//! - One glyph: [`Assembler`] driven by an [`AssemblyConfig`]
//! - Many glyphs: [`discover_groups`] into [`run_batch`] into a [`GlyphSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod assemble;
pub(crate) mod compose;
pub(crate) mod io;
pub(crate) mod layout;
pub(crate) mod session;
pub(crate) mod sprite;

pub use crate::foundation::core::{CanvasSize, Placement, Position};
pub use crate::foundation::error::{GlyphError, GlyphResult};

pub use crate::assemble::assembler::{Assembler, Assembly};
pub use crate::assemble::config::{AssemblyConfig, FallbackFrame, LEGACY_FALLBACK_FRAME};
pub use crate::assemble::report::{AssemblyReport, SpriteOutcome, SpriteStatus};
pub use crate::compose::blend::{StraightRgba8, alpha_composite, paste_masked, stroke_over};
pub use crate::compose::canvas::Canvas;
pub use crate::compose::placer::{PlacementOpts, attraction, place_sprite};
pub use crate::io::sink::{GlyphSink, InMemorySink, PngDirSink};
pub use crate::io::source::{
    GroupInput, GroupSource, StrokeGroup, decode_sprite, discover_groups, load_group, load_groups,
    load_sprite,
};
pub use crate::layout::overlap::{DEFAULT_OVERLAP_THRESHOLD, is_overlapping, overlap_ratio};
pub use crate::layout::size::{plan_size, resize_sprite, target_area_per_stroke};
pub use crate::session::batch::{BatchOpts, BatchStats, assemble_group, run_batch};
pub use crate::sprite::classify::{ShapeClass, classify, classify_dims, interleave_by_shape};
pub use crate::sprite::model::Sprite;
pub use crate::sprite::normalize::normalize_sprite;
