/// Trace command execution with elapsed time since process start
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "load_topology");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
