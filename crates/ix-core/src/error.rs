//! Event and queue error type.
//!
//! Every variant is a deterministic input-validation failure.  Nothing here
//! is transient, so callers never retry; they surface the error.

use thiserror::Error;

/// The error type shared by `ix-core` and `ix-queue`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Wrong kind for a kind-restricted constructor, schedule, or delete
    /// call, a missing/unexpected lane, or an out-of-range timestamp.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `pop_next` on a queue with no events.
    #[error("event queue is empty")]
    EmptyQueue,

    #[error("event parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for event construction and queue operations.
pub type EventResult<T> = Result<T, EventError>;
