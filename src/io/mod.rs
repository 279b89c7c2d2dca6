//! Filesystem boundary: stroke discovery and decoding in, glyph persistence out.

pub(crate) mod sink;
pub(crate) mod source;
