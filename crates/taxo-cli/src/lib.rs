//! CLI library components for Taxonomy Studio.

pub mod logging;
