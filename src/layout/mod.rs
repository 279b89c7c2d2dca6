//! Sizing and overlap rules that decide how large a stroke is drawn and where it may go.

pub(crate) mod overlap;
pub(crate) mod size;
