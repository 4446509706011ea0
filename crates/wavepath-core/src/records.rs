//! Utilities for records output format
//!
//! One header line, one `N` line per vertex on the path, and a closing
//! `W` line with the total weight:
//!
//! ```text
//! H wavepath=1 mode=shortest from="A" to="C" found=true ticks=3 branches=0
//! N "A"
//! N "B"
//! N "C"
//! W 3
//! ```

use crate::graph::PathResult;

/// Records format version
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Render a path result as records lines
pub fn path_records(result: &PathResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.vertices.len() + 2);
    lines.push(format!(
        "H wavepath={} mode={} from=\"{}\" to=\"{}\" found={} ticks={} branches={}",
        RECORDS_VERSION,
        result.mode,
        escape_quotes(&result.from),
        escape_quotes(&result.to),
        result.found,
        result.ticks,
        result.branches,
    ));
    for id in &result.vertices {
        lines.push(format!("N \"{}\"", escape_quotes(id)));
    }
    if result.found {
        lines.push(format!("W {}", result.weight));
    }
    lines
}
