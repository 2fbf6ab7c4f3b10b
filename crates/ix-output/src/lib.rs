//! `ix-output`: event trace writers.
//!
//! A dispatch loop hands each popped event to a [`TraceWriter`] so the run
//! can be inspected or diffed afterwards.  One backend is provided:
//!
//! | Backend            | Files created  |
//! |--------------------|----------------|
//! | [`CsvTraceWriter`] | `events.csv`   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ix_output::{CsvTraceWriter, TraceRow, TraceWriter};
//!
//! let mut trace = CsvTraceWriter::new(Path::new("./output"))?;
//! while let Ok(event) = queue.pop_next() {
//!     trace.write_row(&TraceRow::from(&event))?;
//!     // dispatch …
//! }
//! trace.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use csv::{CsvTraceWriter, TRACE_FILE};
pub use error::{OutputError, OutputResult};
pub use row::TraceRow;
pub use writer::TraceWriter;
