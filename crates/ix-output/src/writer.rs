//! The `TraceWriter` trait implemented by trace backends.

use crate::{OutputResult, TraceRow};

/// Sink for the sequence of events a dispatch loop processed.
pub trait TraceWriter {
    /// Append one row.
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
