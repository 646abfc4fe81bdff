//! Usage: Cross-cutting utilities shared across layers.

pub(crate) mod mutex_ext;
