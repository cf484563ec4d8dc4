//! Custom error types for the filesystem core.
//!
//! All core failures are local precondition violations surfaced
//! synchronously to the caller; there is no transient failure source
//! (no I/O) and therefore no retry policy.

use thiserror::Error;

/// Errors raised by the tree model and the view-model operations
/// that delegate to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// A malformed argument, e.g. an empty or whitespace-only item name
    /// passed to the item factory.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation on an item that cannot accept it, e.g. adding a
    /// child to a tombstoned directory. Indicates a stale reference
    /// held by the caller rather than a recoverable condition.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
