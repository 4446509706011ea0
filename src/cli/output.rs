pub use wavepath_core::format::OutputFormat;
