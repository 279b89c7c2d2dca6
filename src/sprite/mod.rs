//! Stroke sprites and the per-sprite passes applied before layout.

pub(crate) mod classify;
pub(crate) mod model;
pub(crate) mod normalize;
