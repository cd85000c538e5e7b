//! Shared infrastructure used by the analysis modules.

pub mod graph;
