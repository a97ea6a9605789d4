//! Small helpers shared across layers.

pub mod log_sanitizer;
