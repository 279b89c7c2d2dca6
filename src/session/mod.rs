//! Batch driver: assembles many stroke groups and feeds a sink.

pub(crate) mod batch;
