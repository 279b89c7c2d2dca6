//! Per-group orchestration: normalize, order, size and place every stroke of one glyph.

pub(crate) mod assembler;
pub(crate) mod config;
pub(crate) mod report;
