//! Error types and the fatal error hook.
//!
//! Recoverable failures (allocation, parsing, the undefined untyped input path)
//! are reported as [`SlotError`] values. Programmer errors, such as reading a
//! dead slot or comparing through a comparator that was never configured, go
//! through [`undefined_operation`], which never returns.

use crate::alloc::AllocError;

/// Errors returned by fallible slot operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// Formatted input into an untyped slot has no target type.
    #[error("stream input operator (>>) not defined")]
    StreamInputUndefined,

    /// A polymorphic comparator was invoked with no comparison configured.
    #[error("compare undefined")]
    CompareUndefined,

    /// An operation needed a live value but the slot holds none.
    #[error("{op} on uninitialized slot")]
    Uninitialized {
        /// The operation that was attempted.
        op: &'static str,
    },

    /// Text could not be parsed into the slot's value type.
    #[error("cannot parse {type_name}: {message}")]
    Parse {
        /// Name of the target type.
        type_name: &'static str,
        /// The parser's own message.
        message: String,
    },

    /// The allocator backing a big value refused the request.
    #[error(transparent)]
    Alloc(#[from] AllocError),
}

/// Reports a violated precondition and aborts the current operation.
///
/// This is the single fatal reporting path of the crate. It logs the event
/// (when the `tracing` feature is enabled) and panics with
/// `"undefined operation: <what>"`.
#[cold]
#[inline(never)]
#[track_caller]
pub fn undefined_operation(what: &str) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(operation = what, "undefined operation");
    panic!("undefined operation: {what}");
}
