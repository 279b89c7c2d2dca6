//! Shared primitives: geometry, error taxonomy and integer math helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
