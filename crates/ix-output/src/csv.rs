//! CSV trace backend.
//!
//! Writes `events.csv` in the configured output directory:
//!
//! ```csv
//! time,kind,from,to
//! 5.0,Arrival,0,1
//! 5.0,End of color phase,,
//! ```
//!
//! `from`/`to` are empty for lane-less kinds.  `time` uses the same
//! shortest round-trip form as the event text rendering.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

pub const TRACE_FILE: &str = "events.csv";

/// Writes the event trace as CSV to any `Write` sink.
pub struct CsvTraceWriter<W: Write = File> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvTraceWriter<File> {
    /// Create `dir/events.csv` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join(TRACE_FILE))?)
    }
}

impl<W: Write> CsvTraceWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(sink);
        rows.write_record(["time", "kind", "from", "to"])?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> TraceWriter for CsvTraceWriter<W> {
    fn write_row(&mut self, row: &TraceRow) -> OutputResult<()> {
        let opt = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_default();
        self.rows.write_record(&[
            format!("{:?}", row.time),
            row.kind.to_string(),
            opt(row.from),
            opt(row.to),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
