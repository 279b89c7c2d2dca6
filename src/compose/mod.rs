//! Canvas compositing and the randomized placement search.

pub(crate) mod blend;
pub(crate) mod canvas;
pub(crate) mod placer;
