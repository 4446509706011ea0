//! Error macros for wavepath

/// Macro for rejecting a malformed configuration triple
#[macro_export]
macro_rules! bail_invalid_edge {
    ($index:expr, $reason:expr) => {
        return Err($crate::error::WavepathError::invalid_edge($index, $reason))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WavepathError::UsageError($msg.to_string()))
    };
}
