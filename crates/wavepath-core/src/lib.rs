//! Wavepath Core Library
//!
//! Shortest and longest paths between named points of a small weighted
//! undirected graph, computed by simulating a propagating wavefront.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod records;
