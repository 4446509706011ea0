//! CLI commands for wavepath

pub mod check;
pub mod dispatch;
pub mod edges;
pub mod path;
